use criterion::{criterion_group, criterion_main, Criterion};
use garmin_relay::services::{
    build_garmin_workout, build_workout_response, flatten_activity, parse_workout_payload,
};
use serde_json::{json, Value};
use std::hint::black_box;

/// A detail record shaped like a running activity with a full sensor set.
fn running_activity() -> Value {
    let mut summary = serde_json::Map::new();
    for (i, key) in [
        "duration",
        "movingDuration",
        "distance",
        "averageSpeed",
        "maxSpeed",
        "averageHR",
        "maxHR",
        "elevationGain",
        "elevationLoss",
        "avgPower",
        "normPower",
        "calories",
        "aerobicTrainingEffect",
        "averageRunningCadenceInStepsPerMinute",
    ]
    .iter()
    .enumerate()
    {
        summary.insert((*key).to_string(), json!(100.0 + i as f64));
    }

    json!({
        "activityId": 123456789,
        "activityName": "Lunch Run",
        "summaryDTO": summary,
        "metadataDTO": {"lapCount": 10, "hasSplits": true, "personalRecord": false},
        "activityTypeDTO": {"typeKey": "running"},
        "eventTypeDTO": {"typeKey": "uncategorized"},
        "timeZoneUnitDTO": {"timeZone": "UTC"},
        "accessControlRuleDTO": {"typeKey": "private"},
        "splitSummaries": [
            {"splitType": "INTERVAL_WARMUP", "duration": 600.0},
            {"splitType": "INTERVAL_ACTIVE", "duration": 1800.0},
            {"splitType": "INTERVAL_COOLDOWN", "duration": 300.0}
        ]
    })
}

fn laps(count: u64) -> Vec<Value> {
    (1..=count)
        .map(|i| {
            json!({
                "lapIndex": i,
                "distance": 1000.0,
                "duration": 300.0,
                "averageHR": 150.0,
                "lengthDTOs": [],
                "messageIndex": i
            })
        })
        .collect()
}

fn benchmark_reshape(c: &mut Criterion) {
    let raw = running_activity();
    let laps = laps(10);

    let mut group = c.benchmark_group("reshape");

    group.bench_function("flatten_activity", |b| {
        b.iter(|| flatten_activity(black_box(raw.clone())))
    });

    let flat = match flatten_activity(raw.clone()) {
        Value::Object(map) => map,
        _ => unreachable!(),
    };
    group.bench_function("build_workout_response", |b| {
        b.iter(|| build_workout_response(black_box(&flat), black_box(&laps)))
    });

    group.finish();
}

fn benchmark_workout_compile(c: &mut Criterion) {
    let payload = json!({
        "name": "10x400",
        "sport": "running",
        "steps": [
            {"type": "warmup", "duration": {"type": "time", "seconds": 900}, "target": {"type": "none"}},
            {"type": "repeat", "iterations": 10, "steps": [
                {"type": "interval", "duration": {"type": "distance", "meters": 400},
                 "target": {"type": "pace", "minPerKm": "3:50", "maxPerKm": "3:40"}},
                {"type": "recovery", "duration": {"type": "time", "seconds": 90}, "target": {"type": "none"}}
            ]},
            {"type": "cooldown", "duration": {"type": "lapButton"}, "target": {"type": "none"}}
        ]
    });

    c.bench_function("validate_and_compile_workout", |b| {
        b.iter(|| {
            let definition = parse_workout_payload(black_box(&payload)).unwrap();
            build_garmin_workout(&definition)
        })
    });
}

criterion_group!(benches, benchmark_reshape, benchmark_workout_compile);
criterion_main!(benches);
