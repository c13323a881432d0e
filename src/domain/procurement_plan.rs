use serde::{Deserialize, Serialize};

/// Contract type code supplied by the procurement catalogue.
///
/// The catalogue owns the set of values, so the code is carried through
/// unchanged: either as the numeric ordinal or as its symbolic name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContractType {
    Ordinal(i32),
    Code(String),
}

impl Default for ContractType {
    fn default() -> Self {
        Self::Ordinal(0)
    }
}

/// One part of a project procurement plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartOfProcurementPlan {
    pub procurement_design_and_process: Option<String>,
    #[serde(rename = "contracttype", alias = "contractType")]
    pub contract_type: ContractType,
    pub procurement_and_contract_risk: Option<String>,
    pub procurement_milestones: Option<String>,
    pub procurement_activities: Option<String>,
    pub performance_metrics: Option<String>,
    #[serde(
        rename = "rolesResponsabilitiesAndSignOffAutorities",
        alias = "rolesResponsibilitiesAndSignOffAuthorities"
    )]
    pub roles_responsibilities_and_sign_off_authorities: Option<String>,
    #[serde(
        rename = "assumptionsAndContraints",
        alias = "assumptionsAndConstraints"
    )]
    pub assumptions_and_constraints: Option<String>,
}
