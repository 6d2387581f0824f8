//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter      | Implements         | Connects to                    |
//! |--------------|--------------------|--------------------------------|
//! | `log_sink`   | DppListener        | `log` output                   |
//! | `channel`    | DppListener        | bounded outcome channel        |
//! | `ssid`       | SsidTranslator     | identity (no charset policy)   |
//! | `principal`  | PrincipalResolver  | static uid → name table        |
//! | `legacy`     | LegacyCallback     | `log` output                   |

pub mod channel;
pub mod legacy;
pub mod log_sink;
pub mod principal;
pub mod ssid;
