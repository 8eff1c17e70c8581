use ioc_container::component::Autowired;
use ioc_container::context::application_context;
use ioc_container::instance_provider::TypedComponentInstanceProvider;
use ioc_container::{Component, ComponentScan};

// the scan root - every component in this module and its sub-modules will be discovered
#[derive(ComponentScan)]
struct Application;

// this is a component with no dependencies
#[derive(Component)]
struct Greeter;

impl Greeter {
    fn greet(&self, name: &str) {
        println!("Hello {name}!");
    }
}

// this is another component, with a dependency injected after construction
#[derive(Component)]
struct WelcomeService {
    #[autowired]
    greeter: Autowired<Greeter>,
}

impl WelcomeService {
    fn welcome(&self) {
        if let Some(greeter) = self.greeter.get() {
            greeter.greet("world");
        }
    }
}

// note: for the sake of simplicity, errors are unwrapped, rather than gracefully handled
fn main() {
    // the global context scans, creates and injects all components on init
    let context = application_context();
    context.init().expect("error initializing context");

    let service = context
        .bean::<WelcomeService>()
        .expect("WelcomeService is not registered");

    // prints "Hello world!"
    service.welcome();
}
