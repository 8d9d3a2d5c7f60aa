use pretty_assertions::assert_eq;
use tests::prelude::*;

fn read_after_write(test: &mut MappingsTest) {
    let types = test.types();

    assert_none!(types.get::<i32>());
    assert_ok!(types.add::<i32>(db::Type::Integer(4), false));
    assert_eq!(types.get::<i32>(), Some(db::Type::Integer(4)));

    // Reads are repeatable until the mapping changes.
    assert_eq!(types.get::<i32>(), Some(db::Type::Integer(4)));
    assert_eq!(
        types.get_type(TypeInfo::of::<i32>()),
        Some(db::Type::Integer(4))
    );
}

fn add_without_force_keeps_existing(test: &mut MappingsTest) {
    let types = test.types();

    assert_ok!(types.add::<String>(db::Type::Text, false));
    let err = assert_err!(types.add::<String>(db::Type::VarChar(255), false));

    assert!(err.is_mapping_exists());
    assert_eq!(types.get::<String>(), Some(db::Type::Text));
}

fn add_with_force_overwrites(test: &mut MappingsTest) {
    let types = test.types();

    assert_ok!(types.add::<String>(db::Type::Text, false));
    assert_ok!(types.add::<String>(db::Type::VarChar(255), true));

    assert_eq!(types.get::<String>(), Some(db::Type::VarChar(255)));
}

fn clear_empties_both_levels(test: &mut MappingsTest) {
    let types = test.types();

    assert_ok!(types.add::<i32>(db::Type::Integer(4), false));
    assert_ok!(types.add::<Order>(db::Type::Json, false));
    assert_ok!(types.add_field::<Order>("Code", db::Type::VarChar(16), false));
    assert_ok!(types.add_field::<Customer>("Email", db::Type::VarChar(320), false));
    assert_eq!(types.len(), 4);

    types.clear();

    assert!(types.is_empty());
    assert_none!(types.get::<i32>());
    assert_none!(types.get::<Order>());
    assert_none!(assert_ok!(types.get_field::<Order>("Code")));
    assert_none!(assert_ok!(types.get_field::<Customer>("Email")));
}

fn remove_is_idempotent(test: &mut MappingsTest) {
    let types = test.types();

    types.remove::<i32>();
    assert_ok!(types.remove_field::<Order>("Code"));
    assert!(types.is_empty());

    assert_ok!(types.add::<i32>(db::Type::Integer(4), false));
    assert_ok!(types.add_field::<Order>("Code", db::Type::VarChar(16), false));

    types.remove::<i32>();
    types.remove::<i32>();
    assert_ok!(types.remove_field::<Order>("code"));
    assert_ok!(types.remove_field::<Order>("code"));

    assert!(types.is_empty());
}

fn property_names_ignore_case(test: &mut MappingsTest) {
    let types = test.types();

    assert_ok!(types.add_field::<Customer>("Name", db::Type::VarChar(100), false));

    for spelling in ["Name", "name", "NAME", "nAmE"] {
        assert_eq!(
            assert_ok!(types.get_field::<Customer>(spelling)),
            Some(db::Type::VarChar(100)),
            "spelling {spelling:?} on {}",
            test.setup_name()
        );
    }

    let err = assert_err!(types.add_field::<Customer>("NAME", db::Type::Text, false));
    assert!(err.is_mapping_exists());
}

fn non_ascii_names_ignore_case(test: &mut MappingsTest) {
    let types = test.types();

    assert_ok!(types.add_field::<Customer>("RÉGION", db::Type::VarChar(64), false));

    for spelling in ["Région", "région", "rÉgIoN"] {
        assert_eq!(
            assert_ok!(types.get_field::<Customer>(spelling)),
            Some(db::Type::VarChar(64)),
            "spelling {spelling:?} on {}",
            test.setup_name()
        );
    }
    assert_eq!(types.len(), 1);
}

fn descriptors_share_the_canonical_key(test: &mut MappingsTest) {
    let types = test.types();
    let order = EntityType::of::<Order>();

    let code = Property::new::<Order, String>("code");
    assert_ok!(types.add_property(order, &code, db::Type::Text, false));
    assert_eq!(
        assert_ok!(types.get_field::<Order>("Code")),
        Some(db::Type::Text)
    );

    let err = assert_err!(types.add_field::<Order>("Code", db::Type::Uuid, false));
    assert!(err.is_mapping_exists());
    assert_eq!(types.len(), 1);

    let ghost = Property::new::<Order, String>("DoesNotExist");
    let err = assert_err!(types.add_property(order, &ghost, db::Type::Text, false));
    assert!(err.is_property_not_found());
    assert_eq!(types.len(), 1);
}

fn type_and_property_keys_are_independent(test: &mut MappingsTest) {
    let types = test.types();

    assert_ok!(types.add::<Order>(db::Type::Json, false));
    assert_ok!(types.add_field::<Order>("Id", db::Type::Integer(8), false));

    assert_eq!(types.get::<Order>(), Some(db::Type::Json));
    assert_eq!(
        assert_ok!(types.get_field::<Order>("Id")),
        Some(db::Type::Integer(8))
    );

    types.remove::<Order>();
    assert_none!(types.get::<Order>());
    assert_eq!(
        assert_ok!(types.get_field::<Order>("Id")),
        Some(db::Type::Integer(8))
    );
}

fn same_name_on_different_entities(test: &mut MappingsTest) {
    let types = test.types();

    assert_ok!(types.add_field::<Order>("Id", db::Type::Integer(8), false));
    assert_ok!(types.add_field::<Customer>("Id", db::Type::Uuid, false));

    assert_eq!(
        assert_ok!(types.get_field::<Order>(Order::ID)),
        Some(db::Type::Integer(8))
    );
    assert_eq!(
        assert_ok!(types.get_field::<Customer>(Customer::ID)),
        Some(db::Type::Uuid)
    );
}

fn identifier_kinds_share_one_key(test: &mut MappingsTest) {
    let types = test.types();

    assert_ok!(types.add_field::<Order>(Order::CREATED_AT, db::Type::DateTime(7), false));

    let by_field = assert_ok!(types.get_field::<Order>(Field::new("createdAt")));
    let by_bound_field = assert_ok!(types.get_field::<Order>(&Field::of::<Order>("CreatedAt")));
    let by_name = assert_ok!(types.get_field::<Order>(String::from("CREATEDAT")));

    assert_eq!(by_field, Some(db::Type::DateTime(7)));
    assert_eq!(by_bound_field, by_field);
    assert_eq!(by_name, by_field);
}

fn unresolved_identifiers_fail_without_mutation(test: &mut MappingsTest) {
    let types = test.types();

    let err = assert_err!(types.add_field::<Order>("Discount", db::Type::Float(8), false));
    assert!(err.is_property_not_found());

    let err = assert_err!(types.add_field::<Order>(Field::of::<Customer>("Id"), db::Type::Uuid, false));
    assert!(err.is_property_not_found());

    let err = assert_err!(types.add_field::<Order>("", db::Type::Text, false));
    assert!(err.is_null_argument());

    let err = assert_err!(types.get_field::<Order>("Discount"));
    assert!(err.is_property_not_found());

    let err = assert_err!(types.get_field::<Order>(" "));
    assert!(err.is_null_argument());

    assert!(types.is_empty());
}

fn property_level_rejects_absent_type(test: &mut MappingsTest) {
    let types = test.types();

    let err = assert_err!(types.add_field::<Order>("Total", None, false));
    assert!(err.is_invalid_value());
    assert!(types.is_empty());

    // Type level accepts it as "explicitly unmapped".
    assert_ok!(types.add::<f64>(None, false));
    assert!(types.contains_type(TypeInfo::of::<f64>()));
    assert_none!(types.get::<f64>());
}

tests!(
    read_after_write,
    add_without_force_keeps_existing,
    add_with_force_overwrites,
    clear_empties_both_levels,
    remove_is_idempotent,
    property_names_ignore_case,
    non_ascii_names_ignore_case,
    descriptors_share_the_canonical_key,
    type_and_property_keys_are_independent,
    same_name_on_different_entities,
    identifier_kinds_share_one_key,
    unresolved_identifiers_fail_without_mutation,
    property_level_rejects_absent_type,
);
