// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use devtools::path::integration_testing_data_path;
use lightcalc::calculator::CalculatorState;
use serde_json::Value;
use std::fs::File;

#[test]
fn test_end_to_end_scenarios() {
    let path = integration_testing_data_path("scenarios.json");
    let file = File::open(path).unwrap();
    let scenarios: Vec<Value> = serde_json::from_reader(file).unwrap();
    assert!(scenarios.len() > 10);

    for scenario in &scenarios {
        let name = scenario["name"].as_str().unwrap();
        let input = scenario["input"].as_array().unwrap();
        let output = scenario["output"].as_array().unwrap();
        assert_eq!(
            input.len(),
            output.len(),
            "scenario \"{name}\" has mismatched input/output line counts"
        );

        let mut state = CalculatorState::new();
        for (line, expected) in input.iter().zip(output.iter()) {
            let line = line.as_str().unwrap();
            let expected = expected.as_str().unwrap();
            let actual = state
                .process_line(line)
                .expect("scenario lines never contain \"quit\"");
            assert_eq!(actual, expected, "scenario \"{name}\", line {line:?}");
        }
    }
}
