use serde::{Deserialize, Serialize};

/// Клиент. Идентификатор приходит из файла загрузки, а не генерируется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Status string, e.g. "Activo" / "Inactivo" / "Bloqueado"
    pub situation: String,
}
