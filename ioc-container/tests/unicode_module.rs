#![cfg(feature = "derive")]

mod módulo {
    use ioc_container::component::Autowired;
    use ioc_container::{Component, ComponentScan};

    #[derive(ComponentScan)]
    pub struct TestApplication;

    #[derive(Component)]
    pub struct Dependency;

    #[derive(Component)]
    pub struct Consumer {
        #[autowired]
        pub dependency: Autowired<Dependency>,
    }
}

mod modulo {
    use ioc_container::Component;

    #[derive(Component)]
    pub struct OutsideBean;
}

use crate::modulo::OutsideBean;
use crate::módulo::{Consumer, Dependency};
use ioc_container::context::{ApplicationContextBuilder, ContainerState};
use ioc_container::instance_provider::{ComponentInstancePtr, TypedComponentInstanceProvider};

#[test]
fn should_scan_non_ascii_module() {
    let context = ApplicationContextBuilder::new().build();
    context.init().unwrap();

    let consumer = context.bean::<Consumer>().unwrap();
    let dependency = context.bean::<Dependency>().unwrap();

    assert!(ComponentInstancePtr::ptr_eq(
        &consumer.dependency.get().unwrap(),
        &dependency
    ));
    assert!(context.bean::<OutsideBean>().is_none());
    assert_eq!(context.state(), ContainerState::Ready);
}
