// Normalized argument records, one per tool

use super::fragments::{OrganizationFilters, Pagination, PersonCoreFilters, PersonFilters};
use super::{ArgReader, FieldSpec, Schema};
use crate::types::Inclusion;
use serde::Serialize;

pub const INCLUDE_EMAIL: FieldSpec =
    FieldSpec::new("include_email", "Include email addresses (+2 credits per result)");
pub const INCLUDE_PHONE: FieldSpec =
    FieldSpec::new("include_phone", "Include phone numbers (+3 credits per result)");

/// `POST /people/search`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeopleSearch {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub include_email: Inclusion,
    pub include_phone: Inclusion,
    #[serde(flatten)]
    pub person: PersonFilters,
    #[serde(flatten)]
    pub organization: OrganizationFilters,
}

impl Schema for PeopleSearch {
    fn read(reader: &mut ArgReader<'_>) -> Self {
        Self {
            pagination: Pagination::read(reader),
            include_email: reader.toggle(&INCLUDE_EMAIL),
            include_phone: reader.toggle(&INCLUDE_PHONE),
            person: PersonFilters::read(reader),
            organization: OrganizationFilters::read(reader),
        }
    }
}

pub const COMPANY_DOMAIN: FieldSpec = FieldSpec::new("company_domain", "Domain of the company");
pub const FIRST_NAME: FieldSpec = FieldSpec::new("first_name", "First name of the person");
pub const LAST_NAME: FieldSpec =
    FieldSpec::new("last_name", "Last name of the person (optional but recommended)");
pub const TITLE: FieldSpec = FieldSpec::new("title", "Job title or role");
pub const LOCATION: FieldSpec = FieldSpec::new("location", "Location (city, state, or country)");

/// `GET /people/lookup`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonLookup {
    pub company_domain: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub include_email: Inclusion,
    pub include_phone: Inclusion,
}

impl Schema for PersonLookup {
    fn read(reader: &mut ArgReader<'_>) -> Self {
        Self {
            company_domain: reader.required_text(&COMPANY_DOMAIN),
            first_name: reader.required_text(&FIRST_NAME),
            last_name: reader.text(&LAST_NAME),
            title: reader.text(&TITLE),
            location: reader.text(&LOCATION),
            include_email: reader.toggle(&INCLUDE_EMAIL),
            include_phone: reader.toggle(&INCLUDE_PHONE),
        }
    }
}

pub const EMAIL: FieldSpec = FieldSpec::new("email", "Email address to look up");

/// `GET /people/lookup/email`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailLookup {
    pub email: String,
    pub include_phone: Inclusion,
}

impl Schema for EmailLookup {
    fn read(reader: &mut ArgReader<'_>) -> Self {
        Self {
            email: reader.email(&EMAIL),
            include_phone: reader.toggle(&INCLUDE_PHONE),
        }
    }
}

pub const PHONE: FieldSpec = FieldSpec::new("phone", "Phone number to look up");

/// `GET /people/lookup/phone`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhoneLookup {
    pub phone: String,
    pub include_email: Inclusion,
}

impl Schema for PhoneLookup {
    fn read(reader: &mut ArgReader<'_>) -> Self {
        Self {
            phone: reader.required_text(&PHONE),
            include_email: reader.toggle(&INCLUDE_EMAIL),
        }
    }
}

pub const PERSON_LINKEDIN_URL: FieldSpec =
    FieldSpec::new("linkedin_url", "LinkedIn profile URL");

/// `GET /people/profile`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonProfileLookup {
    pub linkedin_url: String,
    pub include_email: Inclusion,
    pub include_phone: Inclusion,
}

impl Schema for PersonProfileLookup {
    fn read(reader: &mut ArgReader<'_>) -> Self {
        Self {
            linkedin_url: reader.required_url(&PERSON_LINKEDIN_URL),
            include_email: reader.toggle(&INCLUDE_EMAIL),
            include_phone: reader.toggle(&INCLUDE_PHONE),
        }
    }
}

pub const FUNDING: FieldSpec =
    FieldSpec::new("funding", "Include funding details (+1 credit per result)");
pub const EXTRA: FieldSpec =
    FieldSpec::new("extra", "Include extended company details (+1 credit per result)");
pub const TECHNOLOGY: FieldSpec =
    FieldSpec::new("technology", "Include technology details (+2 credits per result)");
pub const WEBSITE_TRAFFIC: FieldSpec = FieldSpec::new(
    "website_traffic",
    "Include website traffic details (+1 credit per result)",
);
pub const HEADCOUNT_GROWTH: FieldSpec = FieldSpec::new(
    "headcount_growth",
    "Include headcount growth details (+1 credit per result)",
);

/// `POST /company/search`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySearch {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub funding: Inclusion,
    pub extra: Inclusion,
    pub technology: Inclusion,
    pub website_traffic: Inclusion,
    pub headcount_growth: Inclusion,
    #[serde(flatten)]
    pub person: PersonFilters,
    #[serde(flatten)]
    pub organization: OrganizationFilters,
}

impl Schema for CompanySearch {
    fn read(reader: &mut ArgReader<'_>) -> Self {
        Self {
            pagination: Pagination::read(reader),
            funding: reader.toggle(&FUNDING),
            extra: reader.toggle(&EXTRA),
            technology: reader.toggle(&TECHNOLOGY),
            website_traffic: reader.toggle(&WEBSITE_TRAFFIC),
            headcount_growth: reader.toggle(&HEADCOUNT_GROWTH),
            person: PersonFilters::read(reader),
            organization: OrganizationFilters::read(reader),
        }
    }
}

pub const COMPANY_LINKEDIN_URL: FieldSpec =
    FieldSpec::new("linkedin_url", "LinkedIn company page URL");
pub const DOMAIN: FieldSpec = FieldSpec::new("domain", "Company domain name");
pub const INCLUDE_FUNDING: FieldSpec = FieldSpec::new(
    "include_funding",
    "Include funding and investment information (+2 credits)",
);
pub const INCLUDE_TECHNOLOGY: FieldSpec =
    FieldSpec::new("include_technology", "Include technology stack (+1 credit)");
pub const INCLUDE_CONTACTS: FieldSpec =
    FieldSpec::new("include_contacts", "Include key executive contacts (+3 credits)");

/// `GET /company/profile`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyProfileLookup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub include_funding: Inclusion,
    pub include_technology: Inclusion,
    pub include_contacts: Inclusion,
}

impl Schema for CompanyProfileLookup {
    fn read(reader: &mut ArgReader<'_>) -> Self {
        let lookup = Self {
            linkedin_url: reader.url(&COMPANY_LINKEDIN_URL),
            domain: reader.text(&DOMAIN),
            include_funding: reader.toggle(&INCLUDE_FUNDING),
            include_technology: reader.toggle(&INCLUDE_TECHNOLOGY),
            include_contacts: reader.toggle(&INCLUDE_CONTACTS),
        };
        reader.any_of(&COMPANY_LINKEDIN_URL, &DOMAIN);
        lookup
    }
}

/// `GET /company/employees/count`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeCountLookup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl Schema for EmployeeCountLookup {
    fn read(reader: &mut ArgReader<'_>) -> Self {
        let lookup = Self {
            linkedin_url: reader.url(&COMPANY_LINKEDIN_URL),
            domain: reader.text(&DOMAIN),
        };
        reader.any_of(&COMPANY_LINKEDIN_URL, &DOMAIN);
        lookup
    }
}

pub const EMPLOYER_DOMAIN: FieldSpec =
    FieldSpec::new("company_domain", "Company domain to search within");

/// `POST /company/employees/search`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSearch {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub include_email: Inclusion,
    pub include_phone: Inclusion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(flatten)]
    pub person: PersonCoreFilters,
}

impl Schema for EmployeeSearch {
    fn read(reader: &mut ArgReader<'_>) -> Self {
        let search = Self {
            pagination: Pagination::read(reader),
            include_email: reader.toggle(&INCLUDE_EMAIL),
            include_phone: reader.toggle(&INCLUDE_PHONE),
            company_domain: reader.text(&EMPLOYER_DOMAIN),
            linkedin_url: reader.url(&COMPANY_LINKEDIN_URL),
            person: PersonCoreFilters::read(reader),
        };
        reader.any_of(&EMPLOYER_DOMAIN, &COMPANY_LINKEDIN_URL);
        search
    }
}
