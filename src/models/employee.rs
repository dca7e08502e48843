use serde::Deserialize;

/// Respuesta de `GET /employees/by-user/{id}` (solo lo que usa el frontend)
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    #[serde(default)]
    pub tipo_instructor: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
}

impl EmployeeRecord {
    /// `tipoInstructor` tiene prioridad sobre `tipo`
    pub fn trainer_subtype(&self) -> TrainerSubtype {
        let raw = self
            .tipo_instructor
            .as_deref()
            .or(self.tipo.as_deref())
            .unwrap_or_default();
        TrainerSubtype::parse(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainerSubtype {
    Premium,
    Estandar,
    Other(String),
}

impl TrainerSubtype {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "PREMIUM" => Self::Premium,
            "ESTANDAR" | "ESTÁNDAR" => Self::Estandar,
            _ => Self::Other(raw.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_spellings_of_estandar() {
        assert_eq!(TrainerSubtype::parse("ESTANDAR"), TrainerSubtype::Estandar);
        assert_eq!(TrainerSubtype::parse("Estándar"), TrainerSubtype::Estandar);
        assert_eq!(TrainerSubtype::parse(" premium "), TrainerSubtype::Premium);
        assert_eq!(TrainerSubtype::parse("BASICO"), TrainerSubtype::Other("BASICO".into()));
    }

    #[test]
    fn tipo_instructor_wins_over_tipo() {
        let record: EmployeeRecord =
            serde_json::from_str(r#"{"tipoInstructor": "PREMIUM", "tipo": "ESTANDAR"}"#).unwrap();
        assert_eq!(record.trainer_subtype(), TrainerSubtype::Premium);

        let record: EmployeeRecord = serde_json::from_str(r#"{"tipo": "ESTÁNDAR"}"#).unwrap();
        assert_eq!(record.trainer_subtype(), TrainerSubtype::Estandar);

        let record: EmployeeRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.trainer_subtype(), TrainerSubtype::Other(String::new()));
    }
}
