/// License gap resolution layer - Pure business logic and domain models
///
/// This layer contains the models describing packages with missing license
/// information and the policies that classify and resolve them. It has no
/// dependency on infrastructure.
pub mod domain;
pub mod policies;
