// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Opt-in zoning property sets

mod common;

use common::{fixed_options, records, ref_list};
use std::collections::HashMap;
use zoning_ifc_core::{verify_document, IfcType, Token};
use zoning_ifc_export::{generate_district_ifc, generate_ifc};
use zoning_ifc_model::{BuildingSpec, ComparisonModel, Lot};

#[test]
fn comparison_property_sets() {
    let existing = ComparisonModel {
        lot_width: 50.0,
        lot_depth: 100.0,
        setback_front: 20.0,
        building_width: 30.0,
        building_depth: 40.0,
        building_height: 35.0,
        ..Default::default()
    };
    // No footprint, so no mass property set
    let proposed = ComparisonModel {
        lot_width: 50.0,
        lot_depth: 100.0,
        ..Default::default()
    };

    let mut options = fixed_options(1);
    options.include_properties = true;
    let text = generate_ifc(&existing, &proposed, &options).unwrap();
    let summary = verify_document(&text).unwrap();

    assert_eq!(summary.count(IfcType::IfcPropertySet), 3);
    assert_eq!(summary.count(IfcType::IfcRelDefinesByProperties), 3);
    // 7 lot values twice, 3 mass values without a story count
    assert_eq!(summary.count(IfcType::IfcPropertySingleValue), 17);

    assert!(text.contains("'LotWidth',$,IFCLENGTHMEASURE(50.0),$"));
    assert!(text.contains("'SetbackFront',$,IFCLENGTHMEASURE(20.0),$"));
    // 5000 sq ft in square metres
    assert!(text.contains("'LotArea',$,IFCAREAMEASURE(464.5152),$"));
    assert!(text.contains("'Height',$,IFCLENGTHMEASURE(35.0),$"));
}

#[test]
fn property_sets_relate_to_their_objects() {
    let mut lot = Lot {
        name: Some("A".to_string()),
        lot_width: 40.0,
        lot_depth: 100.0,
        ..Default::default()
    };
    lot.buildings.principal = Some(BuildingSpec {
        width: 20.0,
        depth: 30.0,
        stories: Some(3),
        ..Default::default()
    });
    let lots: HashMap<String, Lot> = [("a".to_string(), lot)].into_iter().collect();

    let mut options = fixed_options(2);
    options.include_properties = true;
    let text = generate_district_ifc(&lots, &["a".to_string()], &options).unwrap();
    verify_document(&text).unwrap();
    assert!(text.contains("'Stories',$,IFCINTEGER(3),$"));

    let records = records(&text);
    let types: HashMap<u32, IfcType> = records.iter().map(|(id, t, _)| (*id, *t)).collect();
    let related: Vec<IfcType> = records
        .iter()
        .filter(|(_, t, _)| *t == IfcType::IfcRelDefinesByProperties)
        .map(|(_, _, args)| {
            let objects = ref_list(&args[4]);
            assert_eq!(objects.len(), 1);
            types[&objects[0]]
        })
        .collect();
    assert_eq!(
        related,
        vec![IfcType::IfcSite, IfcType::IfcBuildingElementProxy]
    );

    let pset_names: Vec<Token> = records
        .iter()
        .filter(|(_, t, _)| *t == IfcType::IfcPropertySet)
        .map(|(_, _, args)| args[2].clone())
        .collect();
    assert_eq!(
        pset_names,
        vec![Token::String("Pset_ZoningLot"), Token::String("Pset_ZoningMass")]
    );
}

#[test]
fn properties_are_off_by_default() {
    let lots: HashMap<String, Lot> = [(
        "a".to_string(),
        Lot {
            lot_width: 40.0,
            lot_depth: 100.0,
            ..Default::default()
        },
    )]
    .into_iter()
    .collect();

    let text = generate_district_ifc(&lots, &["a".to_string()], &fixed_options(3)).unwrap();
    assert!(!text.contains("Pset_"));
}
