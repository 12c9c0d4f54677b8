use crate::core::provider::DNSProvider;
use crate::error::Error;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn DNSProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        ProviderRegistry {
            providers: HashMap::new(),
        }
    }

    pub fn register(&mut self, provider: Arc<dyn DNSProvider>) {
        self.providers.insert(provider.name().to_string(), provider);
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn DNSProvider>, Error> {
        self.providers
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("provider {name}")))
    }

    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::Record;
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::*;
    use std::time::Duration;

    mock! {
        pub Provider {}

        #[async_trait]
        impl DNSProvider for Provider {
            fn name(&self) -> &'static str;
            async fn list_records(&self, zone: &str) -> Result<Vec<Record>, Error>;
            async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>, Error>;
            async fn set_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>, Error>;
            async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>, Error>;
        }
    }

    fn named(name: &'static str) -> MockProvider {
        let mut provider = MockProvider::new();
        provider.expect_name().return_const(name);
        provider
    }

    #[test]
    fn test_register_and_list() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(named("porkbun")));
        registry.register(Arc::new(named("other")));

        assert_eq!(registry.list(), vec!["other".to_string(), "porkbun".to_string()]);
    }

    #[test]
    fn test_get_unknown_provider() {
        let registry = ProviderRegistry::new();
        assert_matches!(registry.get("missing").err(), Some(Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_dispatch_through_registry() {
        let mut provider = named("porkbun");
        provider
            .expect_list_records()
            .with(eq("example.com"))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    Record::new("www", "A", "1.2.3.4", Duration::from_secs(600)).with_id("1"),
                ])
            });

        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(provider));

        let provider = registry.get("porkbun").unwrap();
        let records = provider.list_records("example.com").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "1");
    }
}
