use ioc_container::component::Autowired;
use ioc_container::context::ApplicationContextBuilder;
use ioc_container::instance_provider::TypedComponentInstanceProvider;
use ioc_container::{Component, ComponentScan, ErrorPtr};

mod beans {
    use super::*;

    // the scan root package defaults to the module of the marked type
    #[derive(ComponentScan)]
    struct Application;

    // a custom constructor replaces the generated one
    #[derive(Component)]
    #[component(constructor = "Settings::load")]
    pub struct Settings {
        pub greeting: String,
    }

    impl Settings {
        fn load() -> Result<Self, ErrorPtr> {
            Ok(Self {
                greeting: "Hello".to_string(),
            })
        }
    }

    #[derive(Component)]
    pub struct Greeter {
        #[autowired]
        pub settings: Autowired<Settings>,
        // non-injected fields are initialized with a function
        #[component(default = "default_name")]
        pub name: String,
    }

    fn default_name() -> String {
        "world".to_string()
    }
}

fn main() {
    // independent contexts can be created alongside the global one
    let context = ApplicationContextBuilder::new().build();
    context.init().expect("error initializing context");

    let greeter = context
        .bean::<beans::Greeter>()
        .expect("Greeter is not registered");
    let settings = greeter.settings.get().expect("Settings are not injected");

    // prints "Hello world!"
    println!("{} {}!", settings.greeting, greeter.name);
}
