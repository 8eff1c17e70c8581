use ioc_application::application;
use ioc_container::component::Autowired;
use ioc_container::instance_provider::TypedComponentInstanceProvider;
use ioc_container::{Component, ComponentScan};

// this is the application type marking the root of the component scan
#[derive(ComponentScan)]
struct BasicApplication;

// bean1 depends on bean2, which will be injected after all beans are created
#[derive(Component)]
struct Bean1 {
    #[autowired]
    bean2: Autowired<Bean2>,
    // fields without #[autowired] are not injected
    bean3: Autowired<Bean3>,
}

#[derive(Component)]
struct Bean2;

#[derive(Component)]
struct Bean3;

impl Bean2 {
    fn hello(&self) {
        println!("Hello world!");
    }
}

// note: for the sake of simplicity, errors are unwrapped, rather than gracefully handled
fn main() {
    // create our application, bound to the global context
    let application = application::create_default().expect("unable to create default application");

    let context = application.run().expect("error running application");

    let bean1 = context.bean::<Bean1>().expect("Bean1 is not registered");
    assert!(!bean1.bean3.is_wired());

    // prints "Hello world!"
    if let Some(bean2) = bean1.bean2.get() {
        bean2.hello();
    }
}
