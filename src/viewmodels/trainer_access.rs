// ============================================================================
// TRAINER ACCESS - Variante de la vista de inscripciones/desempeño
// ============================================================================
// Chequeo secundario basado en datos: el guard ya dejó pasar al rol, esto
// decide QUÉ variante de la ruta ve el entrenador.
// ============================================================================

use crate::models::TrainerSubtype;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainerVariant {
    /// PREMIUM: gestión completa de inscripciones
    Management,
    /// ESTANDAR: solo listado
    ListOnly,
    /// Cualquier otro tipo
    Denied { tipo: String },
}

impl TrainerVariant {
    pub fn for_subtype(subtype: &TrainerSubtype) -> Self {
        match subtype {
            TrainerSubtype::Premium => Self::Management,
            TrainerSubtype::Estandar => Self::ListOnly,
            TrainerSubtype::Other(tipo) => Self::Denied { tipo: tipo.clone() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeRecord;

    #[test]
    fn estandar_trainer_only_gets_the_list() {
        let record: EmployeeRecord = serde_json::from_str(r#"{"tipoInstructor": "ESTANDAR"}"#).unwrap();
        assert_eq!(TrainerVariant::for_subtype(&record.trainer_subtype()), TrainerVariant::ListOnly);
    }

    #[test]
    fn premium_gets_management() {
        assert_eq!(TrainerVariant::for_subtype(&TrainerSubtype::Premium), TrainerVariant::Management);
    }

    #[test]
    fn anything_else_is_denied() {
        assert_eq!(
            TrainerVariant::for_subtype(&TrainerSubtype::parse("")),
            TrainerVariant::Denied { tipo: String::new() }
        );
        assert_eq!(
            TrainerVariant::for_subtype(&TrainerSubtype::parse("VIP")),
            TrainerVariant::Denied { tipo: "VIP".to_string() }
        );
    }
}
