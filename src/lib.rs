// SPDX-License-Identifier: PMPL-1.0-or-later

//! folio: multilingual portfolio/resume viewer.
//!
//! Renders one person's resume content in three locales (en, cz, ua) with a
//! light/dark theme. The pieces:
//!
//! 1. **registry**: a minimal service registry (register factories by token,
//!    resolve lazily with single-instance caching).
//! 2. **i18n** / **profile**: static translation tables and per-language
//!    profile literals, exposed through small services.
//! 3. **gui**: the eframe presentation layer laying both out as a page.
//! 4. **export**: the same content rendered to the terminal, markdown, or JSON.
//!
//! All content is constructed once at startup; the only mutable state is the
//! selected language and theme inside the GUI.

pub mod export;
pub mod gui;
pub mod i18n;
pub mod profile;
pub mod registry;
pub mod services;
