// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Commands
//!
//! Each command returns the text to print on success. A failure indicator
//! from the API is turned into an error so the process exits non-zero.

pub mod plugin;
pub mod release;
pub mod salts;
pub mod theme;
