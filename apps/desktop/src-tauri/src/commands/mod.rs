//! # Tauri Commands Module
//!
//! All commands exposed to the webview frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── session.rs  ◄─── Tap handling, session snapshot
//! ├── catalog.rs  ◄─── Tier list retrieval
//! ├── share.rs    ◄─── Share hand-off to the host OS
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                           │
//! │                                                                 │
//! │  Frontend                                                       │
//! │  ────────                                                       │
//! │  import { invoke } from '@tauri-apps/api/core';                 │
//! │                                                                 │
//! │  const snapshot = await invoke('register_sale');                │
//! │         │                                                       │
//! │         │ (IPC via WebView)                                     │
//! │         ▼                                                       │
//! │  Rust Backend                                                   │
//! │  ────────────                                                   │
//! │  #[tauri::command]                                              │
//! │  fn register_sale(                                              │
//! │      session: State<'_, SessionState>, ◄── Injected by Tauri    │
//! │      catalog: State<'_, CatalogState>, ◄── Injected by Tauri    │
//! │  ) -> SessionResponse                                           │
//! │         │                                                       │
//! │         │ (JSON serialization)                                  │
//! │         ▼                                                       │
//! │  Frontend receives: { summary, tier }                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Needs session + catalog
//! fn register_sale(session: State<'_, SessionState>, catalog: State<'_, CatalogState>)
//!
//! // Needs session + config
//! fn share_sales_summary(session: State<'_, SessionState>, config: State<'_, ConfigState>)
//!
//! // Only needs config
//! fn get_config(config: State<'_, ConfigState>)
//! ```

pub mod catalog;
pub mod config;
pub mod session;
pub mod share;
