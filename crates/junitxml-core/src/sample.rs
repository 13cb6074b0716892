//! Reference stress-run tree: four processes, two of which carry a failing event.

use crate::model::{EventResult, Failure, Info, ProcessResult, RunResult, Severity};

pub fn reference_result() -> RunResult {
    let light = ProcessResult::new(
        Info::new("1", "LightStressProcess", "100"),
        "1",
        "0",
        vec![EventResult::new(Info::new("1/1", "LightEvent", "100"), vec![])],
    );

    let soft = ProcessResult::new(
        Info::new("2", "SoftStressProcess", "100"),
        "1",
        "0",
        vec![EventResult::new(Info::new("2/1", "SoftEvent", "100"), vec![])],
    );

    let stress = ProcessResult::new(
        Info::new("3", "StressProcess", "50"),
        "2",
        "1",
        vec![
            EventResult::new(Info::new("3/1", "LightEvent", "25"), vec![]),
            EventResult::new(
                Info::new("3/2", "StressEvent", "25"),
                vec![Failure::new(
                    "too much stress!",
                    Severity::Warning,
                    "event failed at 15:40 with a shutdown",
                )],
            ),
        ],
    );

    let disaster = ProcessResult::new(
        Info::new("4", "DisasterStressProcess", "50"),
        "3",
        "1",
        vec![
            EventResult::new(Info::new("4/1", "LightEvent", "25"), vec![]),
            EventResult::new(Info::new("4/2", "LightEvent", "20"), vec![]),
            EventResult::new(
                Info::new("4/3", "DisasterEvent", "5"),
                vec![Failure::new("explosion", Severity::Error, "EXPLOSION !!!")],
            ),
        ],
    );

    RunResult::new(
        Info::new("100", "StressResult", "300"),
        "4",
        "2",
        vec![light, soft, stress, disaster],
    )
}
