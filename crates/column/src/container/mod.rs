// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod blob;
mod bool;
mod decimal;
mod nested;
mod number;
mod temporal;
mod utf8;

pub use blob::BlobContainer;
pub use bool::BoolContainer;
pub use decimal::DecimalContainer;
pub use nested::{ArrayContainer, MapContainer, StructContainer};
pub use number::NumberContainer;
pub use temporal::TemporalContainer;
pub use utf8::Utf8Container;
