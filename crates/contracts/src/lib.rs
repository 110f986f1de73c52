//! Types shared between the HTTP layer and storage: the four loaded
//! entities and the rows returned by the reporting queries.

pub mod domain;
