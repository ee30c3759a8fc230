use serde::Serialize;

/// The verdict is never graded; every diagnosis is reported as medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
}

/// The verdict printed on stdout, one JSON object per run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnosis {
    pub diagnosis: String,
    pub recommendation: String,
    pub severity: Severity,
    pub confidence: f64,
}

impl Diagnosis {
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_json_has_the_four_keys() {
        let diagnosis = Diagnosis {
            diagnosis: "Eczema".to_string(),
            recommendation: "Consultez un dermatologue pour confirmer.".to_string(),
            severity: Severity::Medium,
            confidence: 82.5,
        };

        let line = diagnosis.to_json_line().unwrap();
        assert!(!line.contains('\n'));

        let value: Value = serde_json::from_str(&line).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(object["diagnosis"], "Eczema");
        assert_eq!(object["recommendation"], "Consultez un dermatologue pour confirmer.");
        assert_eq!(object["severity"], "medium");
        assert_eq!(object["confidence"].as_f64(), Some(82.5));
    }

    #[test]
    fn test_severity_is_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"medium\"");
    }
}
