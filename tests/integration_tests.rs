use quadtree_address::prelude::*;
use quadtree_address::{MAX_DEPTH, numeric};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn point1() -> Wgs84Point {
    Wgs84Point::from_degrees(49.721, 9.124).expect("valid point")
}

fn point2() -> Wgs84Point {
    Wgs84Point::from_degrees(-49.721, -9.124).expect("valid point")
}

#[test]
fn test_depth_matches_request_for_many_points() {
    init_logging();
    let points = [
        (40.7128, -74.0060),
        (51.5074, -0.1278),
        (35.6895, 139.6917),
        (-33.8688, 151.2093),
        (0.0, 0.0),
        (90.0, 180.0),
        (-90.0, -180.0),
    ];

    for (lat, lon) in points {
        let point = Wgs84Point::from_degrees(lat, lon).unwrap();
        for depth in 1..=MAX_DEPTH {
            let address = QuadTreeAddress::from_point(&point, depth).unwrap();
            assert_eq!(address.depth(), depth);
            assert_eq!(QuadTreeAddress::parse(address.as_str()).unwrap(), address);
        }
    }
}

#[test]
fn test_point_lies_in_its_rectangle() {
    let point = Wgs84Point::from_degrees(40.7128, -74.0060).unwrap();
    let address = QuadTreeAddress::from_point(&point, 8).unwrap();
    assert_eq!(address.as_str(), "+ADAABCDB");

    assert!(address.lower_left().latitude_fixed() <= point.latitude_fixed());
    assert!(address.upper_left().latitude_fixed() > point.latitude_fixed());
    assert!(address.lower_left().longitude_fixed() <= point.longitude_fixed());
    assert!(address.lower_right().longitude_fixed() > point.longitude_fixed());
    assert!(address.contains_point(&point));
}

#[test]
fn test_pack_round_trip() {
    for depth in [1, 2, 13, 25, MAX_DEPTH] {
        let text = QuadTreeAddress::from_point(&point2(), depth)
            .unwrap()
            .to_string();
        assert_eq!(unpack(pack(&text).unwrap()).unwrap(), text);
    }
    assert_eq!(unpack(pack("+").unwrap()).unwrap(), "+");
}

#[test]
fn test_packed_example() {
    assert_eq!(
        pack("+ACDCDCBADCDABCDAABCDCBD").unwrap(),
        6629359005329988536
    );
    assert_eq!(
        unpack(6629359005329988536).unwrap(),
        "+ACDCDCBADCDABCDAABCDCBD"
    );
    assert!(numeric::unpack(u64::MAX).is_err());
}

#[test]
fn test_neighbor_examples() {
    init_logging();
    assert_eq!(northern_neighbor("+ACAB").unwrap(), "+AACD");
    assert_eq!(southern_neighbor("+ACAB").unwrap(), "+ACAD");
    assert_eq!(eastern_neighbor("+ACAB").unwrap(), "+ACAA");
    assert_eq!(western_neighbor("+ACAB").unwrap(), "+ACBA");
    assert_eq!(northern_neighbor("+AAAAA").unwrap(), "+CCCCC");
    assert_eq!(eastern_neighbor("+AAAAA").unwrap(), "+BBBBB");
}

#[test]
fn test_neighbor_set() {
    let set = neighbors("+ACAB").unwrap();
    let mut sorted: Vec<&str> = set.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    assert_eq!(
        sorted,
        vec!["+AACC", "+AACD", "+AADC", "+ACAA", "+ACAC", "+ACAD", "+ACBA", "+ACBC"]
    );
    assert!(matches!(
        neighbors("+A"),
        Err(QuadTreeError::InsufficientDepth { .. })
    ));
}

#[test]
fn test_validation_examples() {
    assert!(!is_valid("+BAEA"));
    assert!(!is_valid("ACABACAB"));
    assert!(is_valid("+ACABD"));
}

#[test]
fn test_shortening_matches_direct_encoding() {
    let deep = QuadTreeAddress::from_point(&point1(), 15).unwrap();
    let short = shorten(deep.as_str(), 5).unwrap();
    assert_eq!(short.depth(), 5);
    assert_eq!(short, QuadTreeAddress::from_point(&point1(), 5).unwrap());
}

#[test]
fn test_containment() {
    let outer = QuadTreeAddress::from_point(&point1(), 15).unwrap();
    let inner = QuadTreeAddress::from_point(&point1(), MAX_DEPTH).unwrap();
    let shallower = QuadTreeAddress::from_point(&point1(), 14).unwrap();
    let elsewhere = QuadTreeAddress::from_point(&point2(), 15).unwrap();

    assert!(contains(outer.as_str(), inner.as_str()).unwrap());
    assert!(contains(outer.as_str(), outer.as_str()).unwrap());
    assert!(!contains(outer.as_str(), shallower.as_str()).unwrap());
    assert!(!contains(outer.as_str(), elsewhere.as_str()).unwrap());

    assert!(contains_point(outer.as_str(), &point1()).unwrap());
    assert!(!contains_point(outer.as_str(), &point2()).unwrap());
}

#[test]
fn test_codec_from_json_config() {
    let config = Config::from_json(r#"{ "default_depth": 5 }"#).unwrap();
    let codec = CodecBuilder::new().config(config).build().unwrap();
    assert_eq!(codec.encode(&point1()).unwrap().as_str(), "+BACCC");
}

#[cfg(feature = "geojson")]
#[test]
fn test_geojson_feature() {
    let address = QuadTreeAddress::parse("+ACAB").unwrap();
    let json = address.to_geojson().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["properties"]["quadTree"], "+ACAB");
    assert_eq!(
        value["geometry"]["coordinates"][0][0],
        serde_json::json!([-157.5, 45.0])
    );
    assert_eq!(
        value["geometry"]["coordinates"][0][2],
        serde_json::json!([-135.0, 33.75])
    );
}
