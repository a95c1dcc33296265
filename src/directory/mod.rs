// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! User directory: fetch the user list and present it as a sortable,
//! filterable table.

pub mod client;
pub mod model;
pub mod table;

pub use client::UserDirectoryClient;
pub use model::{parse_users, User};
pub use table::{SortColumn, SortDirection, StatusFilter, UserTable};
