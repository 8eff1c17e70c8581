#[cfg(feature = "derive")]
mod unresolved_test {
    use ioc_container::component::Autowired;
    use ioc_container::context::{ApplicationContextBuilder, ContainerState};
    use ioc_container::instance_provider::TypedComponentInstanceProvider;
    use ioc_container::type_descriptor::TypeDescriptor;
    use ioc_container::{Component, ComponentScan, ContainerError};

    #[derive(ComponentScan)]
    struct TestApplication;

    struct Missing;

    #[derive(Component)]
    struct Consumer {
        #[autowired]
        missing: Autowired<Missing>,
    }

    #[test]
    fn should_fail_on_unregistered_field_type() {
        let context = ApplicationContextBuilder::new().build();

        match context.init().unwrap_err() {
            ContainerError::UnresolvedDependency {
                component,
                field,
                dependency,
            } => {
                assert_eq!(component, TypeDescriptor::of::<Consumer>().to_string());
                assert_eq!(field, "missing");
                assert_eq!(dependency, TypeDescriptor::of::<Missing>().to_string());
            }
            error => panic!("Unexpected error: {error}"),
        }

        assert_eq!(context.state(), ContainerState::Injecting);

        let consumer = context.bean::<Consumer>().unwrap();
        assert!(!consumer.missing.is_wired());
    }
}
