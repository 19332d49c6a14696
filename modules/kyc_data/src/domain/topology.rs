//! Relationship topology of the KYC schema
//!
//! One static table of edges replaces per-entity accessor registration. The
//! relation resolver looks an edge up here to decide whether an inclusion is
//! to-one or to-many; foreign keys themselves are enforced by the store.

use crate::contract::{EntityKind, RelationKind};
use EntityKind::*;

/// A declared relation between two entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationEdge {
    /// Accessor name, unique per owning entity
    pub name: &'static str,
    pub from: EntityKind,
    pub kind: RelationKind,
    pub to: EntityKind,
    /// Junction entity of a many-to-many relation
    pub through: Option<EntityKind>,
}

const fn belongs_to(from: EntityKind, name: &'static str, to: EntityKind) -> RelationEdge {
    RelationEdge {
        name,
        from,
        kind: RelationKind::BelongsTo,
        to,
        through: None,
    }
}

const fn has_one(from: EntityKind, name: &'static str, to: EntityKind) -> RelationEdge {
    RelationEdge {
        name,
        from,
        kind: RelationKind::HasOne,
        to,
        through: None,
    }
}

const fn has_many(from: EntityKind, name: &'static str, to: EntityKind) -> RelationEdge {
    RelationEdge {
        name,
        from,
        kind: RelationKind::HasMany,
        to,
        through: None,
    }
}

const fn through(
    from: EntityKind,
    name: &'static str,
    to: EntityKind,
    junction: EntityKind,
) -> RelationEdge {
    RelationEdge {
        name,
        from,
        kind: RelationKind::HasManyThrough,
        to,
        through: Some(junction),
    }
}

pub const RELATIONS: &[RelationEdge] = &[
    // Users and access control
    has_many(Users, "kyc_applications", KycApplications),
    has_many(Users, "bank_details", BankDetails),
    has_many(Users, "authorize_signatories", AuthorizeSignatories),
    has_many(Users, "user_roles", UserRoles),
    through(Users, "roles", Roles, UserRoles),
    has_many(Roles, "user_roles", UserRoles),
    through(Roles, "users", Users, UserRoles),
    has_many(Roles, "role_permissions", RolePermissions),
    through(Roles, "permissions", Permissions, RolePermissions),
    has_many(Roles, "document_roles", DocumentRoles),
    through(Roles, "document_types", BusinessKycDocumentTypes, DocumentRoles),
    has_many(Permissions, "role_permissions", RolePermissions),
    through(Permissions, "roles", Roles, RolePermissions),
    belongs_to(UserRoles, "user", Users),
    belongs_to(UserRoles, "role", Roles),
    belongs_to(RolePermissions, "role", Roles),
    belongs_to(RolePermissions, "permission", Permissions),
    belongs_to(KycApplications, "user", Users),
    belongs_to(BankDetails, "user", Users),
    belongs_to(AuthorizeSignatories, "user", Users),
    // Company onboarding
    has_many(CompanyEntityTypes, "company_profiles", CompanyProfiles),
    has_many(CompanySectorTypes, "company_profiles", CompanyProfiles),
    belongs_to(CompanyProfiles, "user", Users),
    belongs_to(CompanyProfiles, "company_entity_type", CompanyEntityTypes),
    belongs_to(CompanyProfiles, "company_sector_type", CompanySectorTypes),
    belongs_to(CompanyProfiles, "kyc_application", KycApplications),
    has_one(CompanyProfiles, "company_pan_card", CompanyPanCards),
    has_one(CompanyProfiles, "business_kyc", BusinessKyc),
    has_one(CompanyProfiles, "business_kyc_profile", BusinessKycProfile),
    has_one(CompanyProfiles, "business_kyc_agreement", BusinessKycAgreement),
    has_many(CompanyProfiles, "business_kyc_agreements", BusinessKycAgreement),
    has_many(CompanyProfiles, "business_kyc_audited_financials", BusinessKycAuditedFinancials),
    has_many(CompanyProfiles, "business_kyc_guarantors", BusinessKycGuarantor),
    has_many(CompanyProfiles, "business_kyc_collateral_assets", BusinessKycCollateralAssets),
    belongs_to(CompanyPanCards, "company_profile", CompanyProfiles),
    // Business KYC
    has_many(BusinessKycStatusMaster, "business_kycs", BusinessKyc),
    belongs_to(BusinessKyc, "company_profile", CompanyProfiles),
    belongs_to(BusinessKyc, "status_master", BusinessKycStatusMaster),
    has_one(BusinessKyc, "business_kyc_profile", BusinessKycProfile),
    has_one(BusinessKyc, "business_kyc_agreement", BusinessKycAgreement),
    has_many(BusinessKyc, "collateral_assets", BusinessKycCollateralAssets),
    has_many(BusinessKyc, "client_profiles", BusinessKycClientProfile),
    has_many(BusinessKyc, "guarantors", BusinessKycGuarantor),
    has_many(BusinessKyc, "audited_financials", BusinessKycAuditedFinancials),
    belongs_to(BusinessKycProfile, "business_kyc", BusinessKyc),
    belongs_to(BusinessKycProfile, "company_profile", CompanyProfiles),
    belongs_to(BusinessKycAgreement, "business_kyc", BusinessKyc),
    belongs_to(BusinessKycAgreement, "company_profile", CompanyProfiles),
    belongs_to(BusinessKycAuditedFinancials, "business_kyc", BusinessKyc),
    belongs_to(BusinessKycAuditedFinancials, "company_profile", CompanyProfiles),
    belongs_to(BusinessKycGuarantor, "business_kyc", BusinessKyc),
    belongs_to(BusinessKycGuarantor, "company_profile", CompanyProfiles),
    belongs_to(BusinessKycCollateralAssets, "business_kyc", BusinessKyc),
    belongs_to(BusinessKycCollateralAssets, "company_profile", CompanyProfiles),
    belongs_to(BusinessKycClientProfile, "business_kyc", BusinessKyc),
    // Trustees and investors
    belongs_to(TrusteeProfiles, "user", Users),
    belongs_to(TrusteeProfiles, "kyc_application", KycApplications),
    has_one(TrusteeProfiles, "trustee_pan_card", TrusteePanCards),
    belongs_to(TrusteePanCards, "trustee_profile", TrusteeProfiles),
    belongs_to(InvestorProfiles, "user", Users),
    belongs_to(InvestorProfiles, "kyc_application", KycApplications),
    has_one(InvestorProfiles, "investor_pan_card", InvestorPanCards),
    belongs_to(InvestorPanCards, "investor_profile", InvestorProfiles),
    // Document taxonomy
    has_many(Documents, "document_screens", DocumentScreens),
    through(Documents, "screens", Screens, DocumentScreens),
    has_many(Screens, "document_screens", DocumentScreens),
    through(Screens, "documents", Documents, DocumentScreens),
    belongs_to(DocumentScreens, "document", Documents),
    belongs_to(DocumentScreens, "screen", Screens),
    has_many(BusinessKycDocumentTypes, "document_roles", DocumentRoles),
    through(BusinessKycDocumentTypes, "roles", Roles, DocumentRoles),
    belongs_to(DocumentRoles, "role", Roles),
    belongs_to(DocumentRoles, "document_type", BusinessKycDocumentTypes),
];

/// First edge declared from `from` to `to`
pub fn edge(from: EntityKind, to: EntityKind) -> Option<&'static RelationEdge> {
    RELATIONS.iter().find(|e| e.from == from && e.to == to)
}

/// Edge of `from` with the given accessor name
pub fn named(from: EntityKind, name: &str) -> Option<&'static RelationEdge> {
    RELATIONS.iter().find(|e| e.from == from && e.name == name)
}

/// All edges owned by `from`
pub fn edges_from(from: EntityKind) -> impl Iterator<Item = &'static RelationEdge> {
    RELATIONS.iter().filter(move |e| e.from == from)
}
