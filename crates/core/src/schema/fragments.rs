// Filter blocks shared between the search schemas

use super::{ArgReader, FieldSpec, Schema};
use crate::types::{NumericRange, RoleCount};
use serde::Serialize;

pub const PAGE: FieldSpec = FieldSpec::new("page", "Page number (default: 1)");
pub const PER_PAGE: FieldSpec =
    FieldSpec::new("per_page", "Results per page (max: 100, default: 25)");

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 25;
pub const MAX_PER_PAGE: u32 = 100;

/// Page selection for search endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Schema for Pagination {
    fn read(reader: &mut ArgReader<'_>) -> Self {
        Self {
            page: reader.integer(&PAGE, 1, None, DEFAULT_PAGE),
            per_page: reader.integer(&PER_PAGE, 1, Some(MAX_PER_PAGE), DEFAULT_PER_PAGE),
        }
    }
}

pub const PERSON_TITLES: FieldSpec =
    FieldSpec::new("person_titles", "Current job titles to include");
pub const PERSON_NOT_TITLES: FieldSpec =
    FieldSpec::new("person_not_titles", "Exclude these current job titles");
pub const PERSON_PAST_TITLES: FieldSpec =
    FieldSpec::new("person_past_titles", "Match against past job titles");
pub const PERSON_SENIORITIES: FieldSpec =
    FieldSpec::new("person_seniorities", "Filter by seniority level");
pub const PERSON_LOCATION: FieldSpec =
    FieldSpec::new("person_location", "Current person location");
pub const NOT_PERSON_LOCATION: FieldSpec =
    FieldSpec::new("not_person_location", "Exclude people in these locations");
pub const PERSON_DAYS_IN_CURRENT_TITLE_RANGE: FieldSpec = FieldSpec::new(
    "person_days_in_current_title_range",
    "Days spent in the current title",
);

/// Title, seniority and location filters understood by every people-returning search
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PersonCoreFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_titles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_not_titles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_seniorities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_location: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_person_location: Option<Vec<String>>,
}

impl Schema for PersonCoreFilters {
    fn read(reader: &mut ArgReader<'_>) -> Self {
        Self {
            person_titles: reader.text_list(&PERSON_TITLES),
            person_not_titles: reader.text_list(&PERSON_NOT_TITLES),
            person_seniorities: reader.text_list(&PERSON_SENIORITIES),
            person_location: reader.text_list(&PERSON_LOCATION),
            not_person_location: reader.text_list(&NOT_PERSON_LOCATION),
        }
    }
}

/// Full person filter block of the people and company searches
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PersonFilters {
    #[serde(flatten)]
    pub core: PersonCoreFilters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_past_titles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_days_in_current_title_range: Option<NumericRange>,
}

impl Schema for PersonFilters {
    fn read(reader: &mut ArgReader<'_>) -> Self {
        Self {
            core: PersonCoreFilters::read(reader),
            person_past_titles: reader.text_list(&PERSON_PAST_TITLES),
            person_days_in_current_title_range: reader
                .range(&PERSON_DAYS_IN_CURRENT_TITLE_RANGE),
        }
    }
}

pub const Q_ORGANIZATION_DOMAINS: FieldSpec =
    FieldSpec::new("q_organization_domains", "Match organization domains");
pub const NOT_Q_ORGANIZATION_DOMAINS: FieldSpec = FieldSpec::new(
    "not_q_organization_domains",
    "Exclude organizations with these domains",
);
pub const ORGANIZATION_LOCATION: FieldSpec =
    FieldSpec::new("organization_location", "Company HQ/location");
pub const NOT_ORGANIZATION_LOCATION: FieldSpec = FieldSpec::new(
    "not_organization_location",
    "Exclude companies headquartered in these locations",
);
pub const ORGANIZATION_INDUSTRY: FieldSpec =
    FieldSpec::new("organization_industry", "Industries to include");
pub const ORGANIZATION_NOT_INDUSTRY: FieldSpec =
    FieldSpec::new("organization_not_industry", "Industries to exclude");
pub const ORGANIZATION_SIC_INDUSTRY: FieldSpec =
    FieldSpec::new("organization_sic_industry", "SIC industry codes to include");
pub const ORGANIZATION_NOT_SIC_INDUSTRY: FieldSpec = FieldSpec::new(
    "organization_not_sic_industry",
    "SIC industry codes to exclude",
);
pub const ORGANIZATION_NAICS_INDUSTRY: FieldSpec = FieldSpec::new(
    "organization_naics_industry",
    "NAICS industry codes to include",
);
pub const ORGANIZATION_NOT_NAICS_INDUSTRY: FieldSpec = FieldSpec::new(
    "organization_not_naics_industry",
    "NAICS industry codes to exclude",
);
pub const ORGANIZATION_REVENUE_RANGES: FieldSpec =
    FieldSpec::new("organization_revenue_ranges", "Annual revenue ranges");

/// Domain, location, industry and revenue filters
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FirmographicFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q_organization_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_q_organization_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_location: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_organization_location: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_industry: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_not_industry: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_sic_industry: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_not_sic_industry: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_naics_industry: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_not_naics_industry: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_revenue_ranges: Option<Vec<String>>,
}

impl Schema for FirmographicFilters {
    fn read(reader: &mut ArgReader<'_>) -> Self {
        Self {
            q_organization_domains: reader.text_list(&Q_ORGANIZATION_DOMAINS),
            not_q_organization_domains: reader.text_list(&NOT_Q_ORGANIZATION_DOMAINS),
            organization_location: reader.text_list(&ORGANIZATION_LOCATION),
            not_organization_location: reader.text_list(&NOT_ORGANIZATION_LOCATION),
            organization_industry: reader.text_list(&ORGANIZATION_INDUSTRY),
            organization_not_industry: reader.text_list(&ORGANIZATION_NOT_INDUSTRY),
            organization_sic_industry: reader.text_list(&ORGANIZATION_SIC_INDUSTRY),
            organization_not_sic_industry: reader.text_list(&ORGANIZATION_NOT_SIC_INDUSTRY),
            organization_naics_industry: reader.text_list(&ORGANIZATION_NAICS_INDUSTRY),
            organization_not_naics_industry: reader
                .text_list(&ORGANIZATION_NOT_NAICS_INDUSTRY),
            organization_revenue_ranges: reader.text_list(&ORGANIZATION_REVENUE_RANGES),
        }
    }
}

pub const ORGANIZATION_TECHNOLOGY: FieldSpec = FieldSpec::new(
    "organization_technology",
    "Companies using any of these technologies",
);
pub const ORGANIZATION_ALL_TECHNOLOGY: FieldSpec = FieldSpec::new(
    "organization_all_technology",
    "Companies using all of these technologies",
);
pub const NOT_ORGANIZATION_TECHNOLOGY: FieldSpec = FieldSpec::new(
    "not_organization_technology",
    "Exclude companies using these technologies",
);
pub const ORGANIZATION_HAS_WEB_APP: FieldSpec =
    FieldSpec::new("organization_has_web_app", "Company has a web app");
pub const ORGANIZATION_HAS_MOBILE_APP: FieldSpec =
    FieldSpec::new("organization_has_mobile_app", "Company has a mobile app");
pub const ORGANIZATION_APPSTORE_APP_CATEGORY: FieldSpec = FieldSpec::new(
    "organization_appstore_app_category",
    "App Store categories of the company's apps",
);
pub const ORGANIZATION_PLAYSTORE_APP_CATEGORY: FieldSpec = FieldSpec::new(
    "organization_playstore_app_category",
    "Play Store categories of the company's apps",
);
pub const ORGANIZATION_APPSTORE_RATING: FieldSpec = FieldSpec::new(
    "organization_appstore_rating",
    "App Store rating range (1-5)",
);
pub const ORGANIZATION_PLAYSTORE_RATING: FieldSpec = FieldSpec::new(
    "organization_playstore_rating",
    "Play Store rating range (1-5)",
);
pub const ORGANIZATION_APPSTORE_REVIEW_COUNT: FieldSpec = FieldSpec::new(
    "organization_appstore_review_count",
    "App Store review count range",
);
pub const ORGANIZATION_PLAYSTORE_REVIEW_COUNT: FieldSpec = FieldSpec::new(
    "organization_playstore_review_count",
    "Play Store review count range",
);
pub const ORGANIZATION_IS_WEBSITE_FOR_SALE: FieldSpec = FieldSpec::new(
    "organization_is_website_for_sale",
    "Company website is listed for sale",
);

const MIN_RATING: f64 = 1.0;
const MAX_RATING: f64 = 5.0;

/// Technology stack and app store filters
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TechnologyFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_technology: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_all_technology: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_organization_technology: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_has_web_app: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_has_mobile_app: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_appstore_app_category: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_playstore_app_category: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_appstore_rating: Option<NumericRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_playstore_rating: Option<NumericRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_appstore_review_count: Option<NumericRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_playstore_review_count: Option<NumericRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_is_website_for_sale: Option<bool>,
}

impl Schema for TechnologyFilters {
    fn read(reader: &mut ArgReader<'_>) -> Self {
        Self {
            organization_technology: reader.text_list(&ORGANIZATION_TECHNOLOGY),
            organization_all_technology: reader.text_list(&ORGANIZATION_ALL_TECHNOLOGY),
            not_organization_technology: reader.text_list(&NOT_ORGANIZATION_TECHNOLOGY),
            organization_has_web_app: reader.flag(&ORGANIZATION_HAS_WEB_APP),
            organization_has_mobile_app: reader.flag(&ORGANIZATION_HAS_MOBILE_APP),
            organization_appstore_app_category: reader
                .text_list(&ORGANIZATION_APPSTORE_APP_CATEGORY),
            organization_playstore_app_category: reader
                .text_list(&ORGANIZATION_PLAYSTORE_APP_CATEGORY),
            organization_appstore_rating: reader.bounded_range(
                &ORGANIZATION_APPSTORE_RATING,
                Some(MIN_RATING),
                Some(MAX_RATING),
            ),
            organization_playstore_rating: reader.bounded_range(
                &ORGANIZATION_PLAYSTORE_RATING,
                Some(MIN_RATING),
                Some(MAX_RATING),
            ),
            organization_appstore_review_count: reader
                .range(&ORGANIZATION_APPSTORE_REVIEW_COUNT),
            organization_playstore_review_count: reader
                .range(&ORGANIZATION_PLAYSTORE_REVIEW_COUNT),
            organization_is_website_for_sale: reader.flag(&ORGANIZATION_IS_WEBSITE_FOR_SALE),
        }
    }
}

pub const ORGANIZATION_WEBSITE_TRAFFIC_TOTAL_MONTHLY: FieldSpec = FieldSpec::new(
    "organization_website_traffic_total_monthly",
    "Total monthly website visits",
);
pub const ORGANIZATION_WEBSITE_TRAFFIC_MONTHLY_ORGANIC: FieldSpec = FieldSpec::new(
    "organization_website_traffic_monthly_organic",
    "Monthly organic website visits",
);
pub const ORGANIZATION_WEBSITE_TRAFFIC_MONTHLY_PAID: FieldSpec = FieldSpec::new(
    "organization_website_traffic_monthly_paid",
    "Monthly paid website visits",
);
pub const ORGANIZATION_MONTHLY_GOOGLE_ADSPEND: FieldSpec = FieldSpec::new(
    "organization_monthly_google_adspend",
    "Monthly Google Ads spend",
);

/// Website traffic and ad spend filters
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TrafficFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_website_traffic_total_monthly: Option<NumericRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_website_traffic_monthly_organic: Option<NumericRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_website_traffic_monthly_paid: Option<NumericRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_monthly_google_adspend: Option<NumericRange>,
}

impl Schema for TrafficFilters {
    fn read(reader: &mut ArgReader<'_>) -> Self {
        Self {
            organization_website_traffic_total_monthly: reader
                .range(&ORGANIZATION_WEBSITE_TRAFFIC_TOTAL_MONTHLY),
            organization_website_traffic_monthly_organic: reader
                .range(&ORGANIZATION_WEBSITE_TRAFFIC_MONTHLY_ORGANIC),
            organization_website_traffic_monthly_paid: reader
                .range(&ORGANIZATION_WEBSITE_TRAFFIC_MONTHLY_PAID),
            organization_monthly_google_adspend: reader
                .range(&ORGANIZATION_MONTHLY_GOOGLE_ADSPEND),
        }
    }
}

pub const ORGANIZATION_FUNDING_AMOUNT: FieldSpec = FieldSpec::new(
    "organization_funding_amount",
    "Amount raised in the latest funding round",
);
pub const ORGANIZATION_FUNDING_TOTAL_AMOUNT: FieldSpec = FieldSpec::new(
    "organization_funding_total_amount",
    "Total funding raised",
);
pub const ORGANIZATION_FUNDING_DATE: FieldSpec = FieldSpec::new(
    "organization_funding_date",
    "Date of the latest funding round (timestamp range)",
);
pub const ORGANIZATION_FUNDING_TYPE: FieldSpec = FieldSpec::new(
    "organization_funding_type",
    "Funding round types (e.g. seed, series_a)",
);
pub const ORGANIZATION_FUNDING_LEAD_INVESTORS: FieldSpec = FieldSpec::new(
    "organization_funding_lead_investors",
    "Lead investors of the company's rounds",
);
pub const ORGANIZATION_FUNDING_NUMBER_OF_INVESTORS: FieldSpec = FieldSpec::new(
    "organization_funding_number_of_investors",
    "Number of investors",
);

/// Funding round filters
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FundingFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_funding_amount: Option<NumericRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_funding_total_amount: Option<NumericRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_funding_date: Option<NumericRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_funding_type: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_funding_lead_investors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_funding_number_of_investors: Option<NumericRange>,
}

impl Schema for FundingFilters {
    fn read(reader: &mut ArgReader<'_>) -> Self {
        Self {
            organization_funding_amount: reader.range(&ORGANIZATION_FUNDING_AMOUNT),
            organization_funding_total_amount: reader.range(&ORGANIZATION_FUNDING_TOTAL_AMOUNT),
            organization_funding_date: reader.range(&ORGANIZATION_FUNDING_DATE),
            organization_funding_type: reader.text_list(&ORGANIZATION_FUNDING_TYPE),
            organization_funding_lead_investors: reader
                .text_list(&ORGANIZATION_FUNDING_LEAD_INVESTORS),
            organization_funding_number_of_investors: reader
                .range(&ORGANIZATION_FUNDING_NUMBER_OF_INVESTORS),
        }
    }
}

pub const ORGANIZATION_ROLES_COUNT: FieldSpec = FieldSpec::new(
    "organization_roles_count",
    "Head count per department, as [{department, range}]",
);
pub const ORGANIZATION_OPEN_ROLES_COUNT: FieldSpec = FieldSpec::new(
    "organization_open_roles_count",
    "Open roles per department, as [{department, range}]",
);

/// Department head count filters
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TeamFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_roles_count: Option<Vec<RoleCount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_open_roles_count: Option<Vec<RoleCount>>,
}

impl Schema for TeamFilters {
    fn read(reader: &mut ArgReader<'_>) -> Self {
        Self {
            organization_roles_count: reader.role_counts(&ORGANIZATION_ROLES_COUNT),
            organization_open_roles_count: reader.role_counts(&ORGANIZATION_OPEN_ROLES_COUNT),
        }
    }
}

/// Every organization filter of the people and company searches
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OrganizationFilters {
    #[serde(flatten)]
    pub firmographics: FirmographicFilters,
    #[serde(flatten)]
    pub technology: TechnologyFilters,
    #[serde(flatten)]
    pub traffic: TrafficFilters,
    #[serde(flatten)]
    pub funding: FundingFilters,
    #[serde(flatten)]
    pub team: TeamFilters,
}

impl Schema for OrganizationFilters {
    fn read(reader: &mut ArgReader<'_>) -> Self {
        Self {
            firmographics: FirmographicFilters::read(reader),
            technology: TechnologyFilters::read(reader),
            traffic: TrafficFilters::read(reader),
            funding: FundingFilters::read(reader),
            team: TeamFilters::read(reader),
        }
    }
}
