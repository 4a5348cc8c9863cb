//! Presentational primitives. Each maps its `variant`/`size`/`padding` props
//! to a fixed Tailwind class string; the mapping functions are public so
//! other crates (and tests) can reuse them without rendering.

mod button;
mod card;
mod cn;
mod input;
mod modal;

pub use button::{button_class, Button, ButtonSize, ButtonVariant};
pub use card::{card_class, Card, CardBody, CardFooter, CardHeader, CardPadding, CardVariant};
pub use cn::cn;
pub use input::{input_class, input_hint, Input, InputVariant};
pub use modal::{modal_class, Modal, ModalBody, ModalFooter, ModalHeader, ModalSize, MODAL_TITLE_ID};
