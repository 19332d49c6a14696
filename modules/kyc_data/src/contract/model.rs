//! Contract models for the KYC data layer
//!
//! Entity metadata shared by the audited repositories, the relationship
//! topology and the storage backend.

use std::fmt;

/// How an entity obtains its identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPolicy {
    /// The repository assigns a UUID v4 string before insert when none is supplied
    Assigned,
    /// The database assigns the identifier on insert
    StoreGenerated,
}

/// Cardinality of a declared relation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    BelongsTo,
    HasOne,
    HasMany,
    /// Many-to-many, resolved through a junction entity
    HasManyThrough,
}

impl RelationKind {
    /// Whether the relation resolves to at most one record
    pub fn is_singular(self) -> bool {
        matches!(self, RelationKind::BelongsTo | RelationKind::HasOne)
    }
}

/// Related records loaded alongside a primary record
#[derive(Debug, Clone, PartialEq)]
pub enum Inclusion<M> {
    One(Option<M>),
    Many(Vec<M>),
}

impl<M> Inclusion<M> {
    /// Flatten into a list regardless of cardinality
    pub fn into_vec(self) -> Vec<M> {
        match self {
            Inclusion::One(model) => model.into_iter().collect(),
            Inclusion::Many(models) => models,
        }
    }

    /// The single related record, if this is a to-one inclusion
    pub fn one(&self) -> Option<&M> {
        match self {
            Inclusion::One(model) => model.as_ref(),
            Inclusion::Many(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Inclusion::One(model) => usize::from(model.is_some()),
            Inclusion::Many(models) => models.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Every persisted entity of the KYC schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Users,
    Roles,
    Permissions,
    UserRoles,
    RolePermissions,
    KycApplications,
    BankDetails,
    AuthorizeSignatories,
    Media,
    CompanyEntityTypes,
    CompanySectorTypes,
    CompanyProfiles,
    CompanyPanCards,
    BusinessKycStatusMaster,
    BusinessKyc,
    BusinessKycProfile,
    BusinessKycAgreement,
    BusinessKycAuditedFinancials,
    BusinessKycGuarantor,
    BusinessKycCollateralAssets,
    BusinessKycClientProfile,
    TrusteeProfiles,
    TrusteePanCards,
    InvestorProfiles,
    InvestorPanCards,
    Documents,
    Screens,
    DocumentScreens,
    BusinessKycDocumentTypes,
    DocumentRoles,
}

impl EntityKind {
    pub const ALL: [EntityKind; 30] = [
        EntityKind::Users,
        EntityKind::Roles,
        EntityKind::Permissions,
        EntityKind::UserRoles,
        EntityKind::RolePermissions,
        EntityKind::KycApplications,
        EntityKind::BankDetails,
        EntityKind::AuthorizeSignatories,
        EntityKind::Media,
        EntityKind::CompanyEntityTypes,
        EntityKind::CompanySectorTypes,
        EntityKind::CompanyProfiles,
        EntityKind::CompanyPanCards,
        EntityKind::BusinessKycStatusMaster,
        EntityKind::BusinessKyc,
        EntityKind::BusinessKycProfile,
        EntityKind::BusinessKycAgreement,
        EntityKind::BusinessKycAuditedFinancials,
        EntityKind::BusinessKycGuarantor,
        EntityKind::BusinessKycCollateralAssets,
        EntityKind::BusinessKycClientProfile,
        EntityKind::TrusteeProfiles,
        EntityKind::TrusteePanCards,
        EntityKind::InvestorProfiles,
        EntityKind::InvestorPanCards,
        EntityKind::Documents,
        EntityKind::Screens,
        EntityKind::DocumentScreens,
        EntityKind::BusinessKycDocumentTypes,
        EntityKind::DocumentRoles,
    ];

    /// Table backing the entity
    pub fn table_name(self) -> &'static str {
        match self {
            EntityKind::Users => "users",
            EntityKind::Roles => "roles",
            EntityKind::Permissions => "permissions",
            EntityKind::UserRoles => "user_roles",
            EntityKind::RolePermissions => "role_permissions",
            EntityKind::KycApplications => "kyc_applications",
            EntityKind::BankDetails => "bank_details",
            EntityKind::AuthorizeSignatories => "authorize_signatories",
            EntityKind::Media => "media",
            EntityKind::CompanyEntityTypes => "company_entity_types",
            EntityKind::CompanySectorTypes => "company_sector_types",
            EntityKind::CompanyProfiles => "company_profiles",
            EntityKind::CompanyPanCards => "company_pan_cards",
            EntityKind::BusinessKycStatusMaster => "business_kyc_status_master",
            EntityKind::BusinessKyc => "business_kyc",
            EntityKind::BusinessKycProfile => "business_kyc_profile",
            EntityKind::BusinessKycAgreement => "business_kyc_agreement",
            EntityKind::BusinessKycAuditedFinancials => "business_kyc_audited_financials",
            EntityKind::BusinessKycGuarantor => "business_kyc_guarantor",
            EntityKind::BusinessKycCollateralAssets => "business_kyc_collateral_assets",
            EntityKind::BusinessKycClientProfile => "business_kyc_client_profile",
            EntityKind::TrusteeProfiles => "trustee_profiles",
            EntityKind::TrusteePanCards => "trustee_pan_cards",
            EntityKind::InvestorProfiles => "investor_profiles",
            EntityKind::InvestorPanCards => "investor_pan_cards",
            EntityKind::Documents => "documents",
            EntityKind::Screens => "screens",
            EntityKind::DocumentScreens => "document_screens",
            EntityKind::BusinessKycDocumentTypes => "business_kyc_document_types",
            EntityKind::DocumentRoles => "document_roles",
        }
    }

    /// Junction entities carry nothing but a unique pair of foreign keys
    pub fn is_junction(self) -> bool {
        matches!(
            self,
            EntityKind::UserRoles
                | EntityKind::RolePermissions
                | EntityKind::DocumentScreens
                | EntityKind::DocumentRoles
        )
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}
