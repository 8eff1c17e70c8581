//! A minimal dependency injection container based on component scanning and field autowiring.
//!
//! Components are discovered under a base package declared by a `ComponentScan` type, created once
//! each (singleton scope) and wired together by injecting [Autowired](component::Autowired) fields
//! with beans of the declared type:
//!
//! ```
//! use ioc_container::component::Autowired;
//! use ioc_container::context::application_context;
//! use ioc_container::instance_provider::TypedComponentInstanceProvider;
//! use ioc_container::{Component, ComponentScan};
//!
//! #[derive(ComponentScan)]
//! struct Application;
//!
//! #[derive(Component)]
//! struct Repository;
//!
//! #[derive(Component)]
//! struct Service {
//!     #[autowired]
//!     repository: Autowired<Repository>,
//! }
//!
//! let context = application_context();
//! context.init().expect("error initializing context");
//!
//! let service = context.bean::<Service>().expect("missing service");
//! assert!(service.repository.is_wired());
//! ```
//!
//! ### Features
//!
//! * `derive` - automatically derive [Component](component::Component) and `ComponentScan` (enabled by default)

pub mod bean_registry;
pub mod component;
pub mod context;
mod error;
pub mod instance_provider;
pub mod marker_inspector;
pub mod type_catalog;
pub mod type_descriptor;
pub mod type_locator;

pub use error::{ContainerError, DiscoveryError, ErrorPtr, FieldAccessError};

#[cfg(feature = "derive")]
pub use ioc_container_derive::{Component, ComponentScan};
