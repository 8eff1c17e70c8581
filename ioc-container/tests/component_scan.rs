#![cfg(feature = "derive")]

mod component_scan_test {
    use ioc_container::context::ApplicationContextBuilder;
    use ioc_container::instance_provider::TypedComponentInstanceProvider;
    use ioc_container::type_descriptor::TypeDescriptor;
    use ioc_container::ComponentScan;

    #[derive(ComponentScan)]
    #[component_scan(base_package = "component_scan.services")]
    struct TestApplication;

    use crate::repositories::Repository;
    use crate::services::{AuditService, UserService};

    #[test]
    fn should_only_scan_base_package() {
        let context = ApplicationContextBuilder::new().build();
        context.init().unwrap();

        assert_eq!(
            context.bean_descriptors(),
            vec![
                TypeDescriptor::of::<AuditService>(),
                TypeDescriptor::of::<UserService>(),
            ]
        );
        assert!(context.bean::<Repository>().is_none());
        assert!(context.bean::<TestApplication>().is_none());
    }

    #[test]
    fn should_leave_dependency_outside_base_package_unresolved() {
        let context = ApplicationContextBuilder::new().build();
        context.init().unwrap();

        let user_service = context.bean::<UserService>().unwrap();
        assert!(user_service.audit.is_wired());
        assert!(!user_service.repository.is_wired());
    }
}

mod services {
    use crate::repositories::Repository;
    use ioc_container::component::Autowired;
    use ioc_container::Component;

    #[derive(Component)]
    pub struct UserService {
        #[autowired]
        pub audit: Autowired<AuditService>,
        // not marked, since the repository is outside of the scanned package
        pub repository: Autowired<Repository>,
    }

    #[derive(Component)]
    pub struct AuditService;
}

mod repositories {
    use ioc_container::Component;

    #[derive(Component)]
    pub struct Repository;
}
