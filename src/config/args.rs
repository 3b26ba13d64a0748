//! 命令行参数解析
//!
//! 从参数中拆出配置文件路径，其余参数交给子命令解析。

/// 拆分后的命令行参数
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliArgs {
    /// `-c`/`--config` 指定的配置文件
    pub config_path: Option<String>,
    /// 去掉程序名与配置参数后剩余的参数
    pub rest: Vec<String>,
}

impl CliArgs {
    /// 解析参数（索引 0 为程序名）
    ///
    /// 支持 `-c path`、`--config path`、`-c=path`、`--config=path`，
    /// 多次指定时以最后一次为准。
    pub fn parse(args: &[String]) -> Self {
        let mut parsed = CliArgs::default();
        let mut iter = args.iter().skip(1);

        while let Some(arg) = iter.next() {
            if arg == "-c" || arg == "--config" {
                match iter.next() {
                    Some(path) => parsed.config_path = Some(path.clone()),
                    // 缺少值时原样保留，交给子命令报错
                    None => parsed.rest.push(arg.clone()),
                }
                continue;
            }

            if let Some(path) = arg
                .strip_prefix("-c=")
                .or_else(|| arg.strip_prefix("--config="))
            {
                parsed.config_path = Some(path.to_string());
                continue;
            }

            parsed.rest.push(arg.clone());
        }

        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_flag() {
        let parsed = CliArgs::parse(&args(&["school-admin", "-c", "custom.toml", "seed"]));
        assert_eq!(parsed.config_path.as_deref(), Some("custom.toml"));
        assert_eq!(parsed.rest, args(&["seed"]));
    }

    #[test]
    fn test_long_equals() {
        let parsed = CliArgs::parse(&args(&[
            "school-admin",
            "migrate",
            "--config=prod.toml",
            "up",
        ]));
        assert_eq!(parsed.config_path.as_deref(), Some("prod.toml"));
        assert_eq!(parsed.rest, args(&["migrate", "up"]));
    }

    #[test]
    fn test_short_equals_and_last_wins() {
        let parsed = CliArgs::parse(&args(&[
            "school-admin",
            "-c=a.toml",
            "--config",
            "b.toml",
            "setup",
        ]));
        assert_eq!(parsed.config_path.as_deref(), Some("b.toml"));
        assert_eq!(parsed.rest, args(&["setup"]));
    }

    #[test]
    fn test_no_config() {
        let parsed = CliArgs::parse(&args(&["school-admin", "migrate", "status"]));
        assert_eq!(parsed.config_path, None);
        assert_eq!(parsed.rest, args(&["migrate", "status"]));
    }

    #[test]
    fn test_dangling_flag_is_kept() {
        let parsed = CliArgs::parse(&args(&["school-admin", "seed", "-c"]));
        assert_eq!(parsed.config_path, None);
        assert_eq!(parsed.rest, args(&["seed", "-c"]));
    }
}
