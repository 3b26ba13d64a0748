use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::config::SeedConfig;
use crate::errors::AppError;

/// 种子单元
///
/// `name` 决定执行顺序（按字典序），约定使用补零的数字前缀，
/// 例如 `001_schools`。后执行的种子按业务键查找先前写入的行。
#[async_trait]
pub trait Seed: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(&self, db: &DatabaseConnection, config: &SeedConfig) -> Result<(), AppError>;
}

/// 编译期注册的种子集合
#[derive(Default)]
pub struct SeedRegistry {
    seeds: Vec<Box<dyn Seed>>,
}

impl SeedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<S: Seed + 'static>(&mut self, seed: S) -> &mut Self {
        self.seeds.push(Box::new(seed));
        self
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// 按名称字典序排列，与注册顺序无关；名称重复时报错
    pub fn ordered(&self) -> Result<Vec<&dyn Seed>, AppError> {
        let mut seeds: Vec<&dyn Seed> = self.seeds.iter().map(|s| s.as_ref()).collect();
        seeds.sort_by_key(|s| s.name());

        if let Some(pair) = seeds.windows(2).find(|w| w[0].name() == w[1].name()) {
            return Err(AppError::DuplicateSeed(pair[0].name().to_string()));
        }

        Ok(seeds)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// 只记录执行顺序的种子，可指定失败
    pub(crate) struct Probe {
        pub name: &'static str,
        pub log: Arc<Mutex<Vec<&'static str>>>,
        pub fail: bool,
    }

    #[async_trait]
    impl Seed for Probe {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn run(&self, _db: &DatabaseConnection, _config: &SeedConfig) -> Result<(), AppError> {
            self.log.lock().unwrap().push(self.name);
            if self.fail {
                return Err(AppError::Internal(format!("{} exploded", self.name)));
            }
            Ok(())
        }
    }

    pub(crate) fn probe(name: &'static str, log: &Arc<Mutex<Vec<&'static str>>>) -> Probe {
        Probe {
            name,
            log: log.clone(),
            fail: false,
        }
    }

    fn names(registry: &SeedRegistry) -> Vec<&'static str> {
        registry
            .ordered()
            .unwrap()
            .iter()
            .map(|s| s.name())
            .collect()
    }

    #[test]
    fn test_order_independent_of_registration() {
        let log = Arc::new(Mutex::new(Vec::new()));

        let mut forward = SeedRegistry::new();
        forward
            .register(probe("001-a", &log))
            .register(probe("002-b", &log))
            .register(probe("010-c", &log));

        let mut shuffled = SeedRegistry::new();
        shuffled
            .register(probe("010-c", &log))
            .register(probe("001-a", &log))
            .register(probe("002-b", &log));

        assert_eq!(names(&forward), vec!["001-a", "002-b", "010-c"]);
        assert_eq!(names(&forward), names(&shuffled));
    }

    #[test]
    fn test_lexical_not_numeric() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = SeedRegistry::new();
        registry.register(probe("10_late", &log)).register(probe("9_early", &log));

        // 未补零时 "10" 排在 "9" 之前
        assert_eq!(names(&registry), vec!["10_late", "9_early"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = SeedRegistry::new();
        registry
            .register(probe("001_schools", &log))
            .register(probe("002_grades", &log))
            .register(probe("001_schools", &log));

        // 注册时不检查，排序时才报错
        assert_eq!(registry.len(), 3);
        let err = registry.ordered().err().unwrap();
        assert!(matches!(err, AppError::DuplicateSeed(ref name) if name == "001_schools"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = SeedRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.ordered().unwrap().is_empty());
    }
}
