mod common;
use common::{date, fixture, time};
use presence_analyzer::data::users::parse_users;
use presence_analyzer::data::{get_data, get_user_timetable, get_users};
use presence_analyzer::errors::AppError;

#[test]
fn test_get_data() {
    let data = get_data(&fixture("test_data.csv")).expect("load csv");

    let mut users: Vec<u32> = data.keys().copied().collect();
    users.sort();
    assert_eq!(users, vec![10, 11]);

    let sample_date = date(2013, 9, 10);
    let rec = data[&10][&sample_date];
    assert_eq!(rec.start, time(9, 39, 5));
    assert_eq!(rec.end, time(17, 59, 52));
    assert_eq!(data[&10].len(), 3);
    assert_eq!(data[&11].len(), 5);
}

#[test]
fn test_get_data_broken_datasource() {
    // bad types, impossible dates, short rows and a footer are all dropped
    let data = get_data(&fixture("test_broken_data.csv")).expect("load csv");
    assert_eq!(data.len(), 1);
    assert_eq!(data[&11].len(), 5);
}

#[test]
fn test_get_data_broken_datasource_extra_column() {
    let data = get_data(&fixture("test_broken_data2.csv")).expect("load csv");
    assert!(data.is_empty());
}

#[test]
fn test_get_data_missing_file() {
    let err = get_data(&fixture("does_not_exist.csv")).unwrap_err();
    assert!(matches!(err, AppError::Csv(_)), "{err:?}");
}

#[test]
fn test_get_data_later_row_wins() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("dup.csv");
    std::fs::write(
        &path,
        "10,2013-09-10,09:00:00,17:00:00\n10,2013-09-10,10:00:00,18:00:00\n",
    )
    .expect("write csv");

    let data = get_data(&path).expect("load csv");
    assert_eq!(data[&10][&date(2013, 9, 10)].start, time(10, 0, 0));
}

#[test]
fn test_get_user_timetable_unknown_user() {
    let err = get_user_timetable(&fixture("test_data.csv"), 666).unwrap_err();
    assert!(matches!(err, AppError::UserNotFound(666)), "{err:?}");
}

#[test]
fn test_get_users() {
    let users = get_users(&fixture("test_users.xml")).expect("load xml");

    assert_eq!(users.len(), 2);
    // ordered by id regardless of file order
    let ids: Vec<u32> = users.keys().copied().collect();
    assert_eq!(ids, vec![10, 11]);

    let user = &users[&10];
    assert_eq!(user.name, "User 10");
    assert_eq!(user.avatar, "https://intranet.example.com/api/images/users/10");
}

#[test]
fn test_parse_users_without_users() {
    let xml = "<intranet><server><host>h</host><protocol>http</protocol></server><users></users></intranet>";
    let users = parse_users(xml).expect("parse xml");
    assert!(users.is_empty());
}

#[test]
fn test_parse_users_broken_xml() {
    let err = parse_users("<intranet><server>").unwrap_err();
    assert!(matches!(err, AppError::Xml(_)), "{err:?}");
}
