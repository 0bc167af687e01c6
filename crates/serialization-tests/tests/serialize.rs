use ndstride::{s, Indexer, Order, Shape, Slice, Strides, Subregion};

#[test]
fn serial_shape_serde() {
    {
        let a = Shape::new([2, 3, 4]);
        let serial = serde_json::to_string(&a).unwrap();
        println!("Serde encode {:?} => {:?}", a, serial);
        assert_eq!(serial, "[2,3,4]");
        let res = serde_json::from_str::<Shape<3>>(&serial);
        println!("{:?}", res);
        assert_eq!(a, res.unwrap());
    }

    {
        let a = Strides::new([-12, 0, 1]);
        let serial = serde_json::to_string(&a).unwrap();
        println!("Serde encode {:?} => {:?}", a, serial);
        let res = serde_json::from_str::<Strides<3>>(&serial);
        println!("{:?}", res);
        assert_eq!(a, res.unwrap());
    }

    {
        // wrong rank
        let res = serde_json::from_str::<Shape<2>>("[2,3,4]");
        println!("{:?}", res);
        assert!(res.is_err());
        let res = serde_json::from_str::<Shape<4>>("[2,3,4]");
        println!("{:?}", res);
        assert!(res.is_err());
    }
}

#[test]
fn serial_subregion_serde() {
    let view = Subregion::from_shape(Shape::new([4, 6]))
        .subregion(s![1.., ..;2])
        .unwrap();
    let serial = serde_json::to_string(&view).unwrap();
    println!("Serde encode {:?} => {:?}", view, serial);
    let res = serde_json::from_str::<Subregion<2>>(&serial);
    println!("{:?}", res);
    assert_eq!(view, res.unwrap());

    let text = r##"{"shape":[3,3],"strides":[6,2],"offset":6}"##;
    let b = serde_json::from_str::<Subregion<2>>(text);
    assert_eq!(view, b.unwrap());
}

#[test]
fn serial_indexers_serde() {
    let args = s![1, 2..;3, .., Slice::new(-4, Some(-1), 1)];
    let serial = serde_json::to_string(&args).unwrap();
    println!("Serde encode {:?} => {:?}", args, serial);
    let res = serde_json::from_str::<[Indexer; 4]>(&serial);
    println!("{:?}", res);
    assert_eq!(args, res.unwrap());

    let order = serde_json::from_str::<Order>(r#""ColumnMajor""#).unwrap();
    assert_eq!(order, Order::F);
}

#[test]
fn serial_many_dim_serde_msgpack() {
    let view = Subregion::new(Shape::new([2, 1, 3, 4]), Strides::new([12, 12, 4, 1])).with_offset(5);

    let mut buf = Vec::new();
    serde::Serialize::serialize(&view, &mut rmp_serde::Serializer::new(&mut buf)).unwrap();

    let mut deserializer = rmp_serde::Deserializer::new(&buf[..]);
    let view_de: Subregion<4> = serde::Deserialize::deserialize(&mut deserializer).unwrap();

    assert_eq!(view, view_de);
}

#[test]
fn serial_many_dim_ron() {
    use ron::de::from_str as ron_deserialize;
    use ron::ser::to_string as ron_serialize;

    let view = Subregion::from_shape(Shape::new([5, 7])).subregion(s![-1, 2..6]).unwrap();
    let serial = ron_serialize(&view).unwrap();
    println!("RON encode {:?} => {:?}", view, serial);
    let res = ron_deserialize::<Subregion<2>>(&serial);
    println!("{:?}", res);
    assert_eq!(view, res.unwrap());

    let slice = Slice::new(1, None, 2);
    let serial = ron_serialize(&slice).unwrap();
    assert_eq!(ron_deserialize::<Slice>(&serial).unwrap(), slice);
}
