mod common;

use leadgen::entities::company;
use leadgen::models::{describe_company, CompanyDetail, CompanyListItem, DEFAULT_DESCRIPTION};

#[test]
fn test_description_joins_profile_facts_in_order() {
    let model = company::Model {
        market_size: Some("Mid-market".to_string()),
        company_size: Some("50-200".to_string()),
        revenue_threshold: Some("$10M+".to_string()),
        ..common::company(1, "Cedar Financial")
    };
    assert_eq!(
        describe_company(&model),
        "Market Size: Mid-market | Company Size: 50-200 | Revenue: $10M+"
    );

    let model = company::Model {
        revenue_threshold: Some("$1M".to_string()),
        ..common::company(1, "Cedar Financial")
    };
    assert_eq!(describe_company(&model), "Revenue: $1M");
}

#[test]
fn test_description_prefers_facts_over_pain_points() {
    let model = company::Model {
        market_size: Some("Enterprise".to_string()),
        pain_points: Some("Manual reconciliation".to_string()),
        ..common::company(1, "Cedar Financial")
    };
    assert_eq!(describe_company(&model), "Market Size: Enterprise");
}

#[test]
fn test_description_falls_back_to_pain_points_then_triggers() {
    let model = company::Model {
        market_size: Some(String::new()),
        pain_points: Some("Manual reconciliation".to_string()),
        buying_triggers: Some("New CFO".to_string()),
        ..common::company(1, "Cedar Financial")
    };
    assert_eq!(describe_company(&model), "Manual reconciliation");

    let model = company::Model {
        pain_points: Some(String::new()),
        buying_triggers: Some("New CFO".to_string()),
        ..common::company(1, "Cedar Financial")
    };
    assert_eq!(describe_company(&model), "New CFO");

    assert_eq!(describe_company(&common::company(1, "Cedar Financial")), DEFAULT_DESCRIPTION);
}

#[test]
fn test_description_truncates_long_text_on_char_boundary() {
    let exact = "é".repeat(200);
    let model = company::Model {
        pain_points: Some(exact.clone()),
        ..common::company(1, "Cedar Financial")
    };
    assert_eq!(describe_company(&model), exact);

    let long = format!("{}tail", "é".repeat(200));
    let model = company::Model {
        buying_triggers: Some(long),
        ..common::company(1, "Cedar Financial")
    };
    let description = describe_company(&model);
    assert!(description.ends_with("..."));
    assert_eq!(description.chars().count(), 203);
    assert!(!description.contains("tail"));
}

#[test]
fn test_list_item_and_detail_carry_derived_slug() {
    let model = company::Model {
        market_size: Some("SMB".to_string()),
        ..common::company(7, "Tech@Corp Solutions!")
    };

    let item = CompanyListItem::from(model.clone());
    assert_eq!(item.company_slug, "tech-at-corp-solutions");
    assert_eq!(item.company_description.as_deref(), Some("Market Size: SMB"));
    assert_eq!(item.company_website.as_deref(), Some("https://7.example.com"));

    let detail = CompanyDetail::from(model);
    assert_eq!(detail.co_rowid, 7);
    assert_eq!(detail.company_slug, "tech-at-corp-solutions");
    assert_eq!(detail.market_size.as_deref(), Some("SMB"));
}
