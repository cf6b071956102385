//! Tests for the tour catalogue endpoint.

mod get_tours;

use super::*;
