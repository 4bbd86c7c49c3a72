// 🏥 Healthcare Entities - patients and the prescriptions issued to them
//
// Prescriptions reference a patient by id; the two live in separate stores
// and nothing cascades between them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{check_id, check_text, Entity};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(alias = "Id")]
    pub id: u32,

    #[serde(alias = "Name")]
    pub name: String,

    #[serde(alias = "Age")]
    pub age: u32,

    #[serde(alias = "Gender")]
    pub gender: String,
}

impl Patient {
    pub fn new(id: i64, name: &str, age: u32, gender: &str) -> Result<Self> {
        let id = check_id(id)?;
        check_text("name", name)?;
        check_text("gender", gender)?;

        Ok(Patient {
            id,
            name: name.trim().to_string(),
            age,
            gender: gender.trim().to_string(),
        })
    }
}

impl Entity for Patient {
    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<()> {
        check_id(i64::from(self.id))?;
        check_text("name", &self.name)?;
        check_text("gender", &self.gender)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    #[serde(alias = "Id")]
    pub id: u32,

    /// Id of the patient in the patient store
    #[serde(alias = "PatientId")]
    pub patient_id: u32,

    #[serde(alias = "MedicationName")]
    pub medication_name: String,

    #[serde(alias = "DateIssued")]
    pub date_issued: NaiveDate,
}

impl Prescription {
    pub fn new(
        id: i64,
        patient_id: i64,
        medication_name: &str,
        date_issued: NaiveDate,
    ) -> Result<Self> {
        let id = check_id(id)?;
        let patient_id = check_id(patient_id)
            .map_err(|_| Error::invalid("patient_id", "must be a positive id"))?;
        check_text("medication_name", medication_name)?;

        Ok(Prescription {
            id,
            patient_id,
            medication_name: medication_name.trim().to_string(),
            date_issued,
        })
    }
}

impl Entity for Prescription {
    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.medication_name
    }

    fn validate(&self) -> Result<()> {
        check_id(i64::from(self.id))?;
        check_id(i64::from(self.patient_id))?;
        check_text("medication_name", &self.medication_name)
    }
}
