//! Application bootstrapping based on [ioc_container] dependency injection.
//!
//! A dependency injection container needs an entrypoint which initializes it before any bean is
//! used. This crate provides such entrypoint in the form of
//! [Application](application::Application), which also configures supporting infrastructure, e.g.
//! logging. The process-wide [ApplicationContext](ioc_container::context::ApplicationContext) is
//! returned after a successful run, so beans can be looked up with
//! [TypedComponentInstanceProvider](ioc_container::instance_provider::TypedComponentInstanceProvider).

pub mod application;
pub mod config;
