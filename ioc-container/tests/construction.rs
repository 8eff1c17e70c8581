#[cfg(feature = "derive")]
mod construction_test {
    use ioc_container::context::ApplicationContextBuilder;
    use ioc_container::{Component, ComponentScan, ContainerError, ErrorPtr};
    use std::fmt::{Display, Formatter};
    use std::sync::Arc;

    #[derive(ComponentScan)]
    struct TestApplication;

    #[derive(Debug)]
    struct ConnectionError;

    impl Display for ConnectionError {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str("connection refused")
        }
    }

    impl std::error::Error for ConnectionError {}

    #[derive(Component)]
    #[component(constructor = "FailingBean::connect")]
    struct FailingBean;

    impl FailingBean {
        fn connect() -> Result<Self, ErrorPtr> {
            Err(Arc::new(ConnectionError))
        }
    }

    #[test]
    fn should_report_construction_failure() {
        let context = ApplicationContextBuilder::new().build();

        match context.init().unwrap_err() {
            ContainerError::ConstructionFailed { type_name, source } => {
                assert!(type_name.ends_with("FailingBean"));
                assert_eq!(source.to_string(), "connection refused");
            }
            error => panic!("Unexpected error: {error}"),
        }
    }
}
