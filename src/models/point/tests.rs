use super::*;

fn sample_new_point() -> NewPoint {
    NewPoint {
        image: "https://example.com/market.jpg".to_string(),
        name: "Mercado do Bairro".to_string(),
        email: "contato@mercado.com".to_string(),
        whatsapp: "11999990000".to_string(),
        latitude: -23.5505,
        longitude: -46.6333,
        city: "São Paulo".to_string(),
        uf: "SP".to_string(),
    }
}

#[test]
fn test_with_id_keeps_inserted_values() {
    let point = Point::with_id(7, sample_new_point());

    assert_eq!(point.get_id(), 7);
    assert_eq!(point.get_image(), "https://example.com/market.jpg");
    assert_eq!(point.get_name(), "Mercado do Bairro");
    assert_eq!(point.get_email(), "contato@mercado.com");
    assert_eq!(point.get_whatsapp(), "11999990000");
    assert_eq!(point.get_latitude(), -23.5505);
    assert_eq!(point.get_longitude(), -46.6333);
    assert_eq!(point.get_city(), "São Paulo");
    assert_eq!(point.get_uf(), "SP");
}

#[test]
fn test_point_serializes_flat() {
    let point = Point::with_id(1, sample_new_point());
    let json = serde_json::to_value(&point).unwrap();

    assert_eq!(json["id"], 1);
    assert_eq!(json["uf"], "SP");
    assert_eq!(json["latitude"], -23.5505);
    assert_eq!(json.as_object().unwrap().len(), 9);
}

#[test]
fn test_point_deserializes_from_api_shape() {
    let json = serde_json::json!({
        "id": 3,
        "image": "img",
        "name": "Ponto",
        "email": "a@b.c",
        "whatsapp": "1",
        "latitude": 1.5,
        "longitude": -2.5,
        "city": "Recife",
        "uf": "PE"
    });

    let point: Point = serde_json::from_value(json).unwrap();
    assert_eq!(point.get_id(), 3);
    assert_eq!(point.get_city(), "Recife");
    assert_eq!(point.get_longitude(), -2.5);
}
