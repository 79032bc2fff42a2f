//! Unit tests for the task collection engine.

mod support;

mod domain_tests;
