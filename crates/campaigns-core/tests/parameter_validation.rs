use campaigns_core::schema::{Field, FieldSet};
use campaigns_core::validate::{validate_dimensions, validate_duration, validate_fields, Dimensions};
use campaigns_core::CampaignError;
use chrono::NaiveDate;

fn assert_invalid<T: std::fmt::Debug>(result: Result<T, CampaignError>, param: &str) {
    match result {
        Err(CampaignError::InvalidQueryParameter { param: p, .. }) => assert_eq!(p, param),
        other => panic!("expected InvalidQueryParameter for {param}, got {other:?}"),
    }
}

#[test]
fn dimensions_default_to_country_and_category() {
    let dims = validate_dimensions(None).unwrap();
    assert_eq!(dims, Dimensions { x: Field::Country, y: Field::Category });
}

#[test]
fn every_distinct_key_pair_is_accepted_in_order() {
    for x in Field::ALL {
        for y in Field::ALL {
            let raw = format!("{x},{y}");
            let result = validate_dimensions(Some(raw.as_str()));
            if x == y {
                assert_invalid(result, "dimensions");
            } else {
                assert_eq!(result.unwrap(), Dimensions { x, y });
            }
        }
    }
}

#[test]
fn malformed_dimensions_are_rejected() {
    for raw in [
        "",
        "country",
        "country,",
        ",country",
        "country,category,goal",
        "country, category",
        "Country,category",
        "country;category",
        "uri,name",
    ] {
        assert_invalid(validate_dimensions(Some(raw)), "dimensions");
    }
}

#[test]
fn fields_default_to_every_key() {
    let fields = validate_fields(None).unwrap();
    assert_eq!(fields, Field::ALL.into_iter().collect::<FieldSet>());
}

#[test]
fn duplicate_fields_collapse() {
    let fields = validate_fields(Some("name,budget,name,name")).unwrap();
    assert_eq!(fields, [Field::Name, Field::Budget].into_iter().collect::<FieldSet>());
}

#[test]
fn single_field_is_accepted() {
    let fields = validate_fields(Some("goal")).unwrap();
    assert_eq!(fields.len(), 1);
    assert!(fields.contains(&Field::Goal));
}

#[test]
fn malformed_fields_are_rejected() {
    for raw in ["", ",", "name,", ",name", "name,,goal", "name,uri", "name goal", "NAME"] {
        assert_invalid(validate_fields(Some(raw)), "fields");
    }
}

#[test]
fn duration_defaults_to_december_2018_through_2019() {
    let duration = validate_duration(None).unwrap();
    assert_eq!(duration.start, NaiveDate::from_ymd_opt(2018, 12, 1).unwrap());
    assert_eq!(duration.end, NaiveDate::from_ymd_opt(2019, 12, 1).unwrap());
}

#[test]
fn duration_parses_day_month_year() {
    let duration = validate_duration(Some("5-1-2019,25-11-2019")).unwrap();
    assert_eq!(duration.start, NaiveDate::from_ymd_opt(2019, 1, 5).unwrap());
    assert_eq!(duration.end, NaiveDate::from_ymd_opt(2019, 11, 25).unwrap());
}

#[test]
fn single_day_duration_is_accepted() {
    let duration = validate_duration(Some("1-12-2019,1-12-2019")).unwrap();
    assert_eq!(duration.start, duration.end);
}

#[test]
fn reversed_duration_is_rejected() {
    assert_invalid(validate_duration(Some("1-12-2020,1-12-2019")), "duration");
}

#[test]
fn malformed_duration_is_rejected() {
    for raw in ["", "1-12-2018", "1-12-2018,", "1-12-2018,1-12-2019,1-1-2020", "2018-12-1,2019-12-1", "1/12/2018,1/12/2019", "0-12-2018,1-12-2019"] {
        assert_invalid(validate_duration(Some(raw)), "duration");
    }
}

#[test]
fn rejection_message_names_the_parameter() {
    let err = validate_dimensions(Some("goal,goal")).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("invalid query parameter 'dimensions'"), "{msg}");
}
