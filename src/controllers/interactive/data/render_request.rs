use crate::core::data::field_params::FieldParams;
use crate::core::fractals::field_kinds::FieldKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub kind: FieldKind,
    pub params: FieldParams,
}

impl RenderRequest {
    #[must_use]
    pub fn new(kind: FieldKind, params: FieldParams) -> Self {
        Self { kind, params }
    }
}
