mod common;
use common::SAMPLE_REPORT;
use shiftsheet::core::parser::matchers::{
    LineKind, classify_activity_line, classify_header_line, match_lane_header,
};
use shiftsheet::core::parser::{parse_activities, scan_headers};
use shiftsheet::{Lane, UNKNOWN, parse_lane_report, parse_report};

fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

// ---------------------------
// Header scanner
// ---------------------------

#[test]
fn test_header_month_name_and_shift() {
    let h = scan_headers(&lines("05 oktober 2025\nShift B"));
    assert_eq!(h.date, "05 October 2025");
    assert_eq!(h.shift, "B");
}

#[test]
fn test_header_defaults_to_unknown() {
    let h = scan_headers(&lines("Jalur A\n16.00-16.15 Patrol\nsemua aman"));
    assert_eq!(h.date, UNKNOWN);
    assert_eq!(h.shift, UNKNOWN);
}

#[test]
fn test_header_numeric_dates() {
    assert_eq!(scan_headers(&["05-10-2025"]).date, "05 October 2025");
    assert_eq!(scan_headers(&["5/1/2026"]).date, "05 January 2026");
}

#[test]
fn test_header_month_name_is_case_insensitive() {
    assert_eq!(scan_headers(&["  7 DESEMBER 2024  "]).date, "07 December 2024");
}

#[test]
fn test_header_invalid_calendar_date_rebuilt_from_parts() {
    assert_eq!(scan_headers(&["31-02-2025"]).date, "31-02-2025");
    assert_eq!(scan_headers(&["05/13/2025"]).date, "05-13-2025");
    assert_eq!(scan_headers(&["31/02/2025"]).date, "31-02-2025");
    assert_eq!(scan_headers(&["32 oktober 2025"]).date, "32 oktober 2025");
    assert_eq!(scan_headers(&["31 Februari 2025"]).date, "31 februari 2025");
}

#[test]
fn test_header_year_zero_is_not_a_calendar_date() {
    assert_eq!(scan_headers(&["05-10-0000"]).date, "05-10-0000");
    assert_eq!(scan_headers(&["05/10/0000"]).date, "05-10-0000");
    assert_eq!(scan_headers(&["05 oktober 0000"]).date, "05 oktober 0000");
}

#[test]
fn test_header_unknown_month_name_is_ignored() {
    assert_eq!(scan_headers(&["05 octobre 2025"]).date, UNKNOWN);
}

#[test]
fn test_header_shift_variants() {
    assert_eq!(scan_headers(&["Shift: B (pagi)"]).shift, "B (pagi)");
    assert_eq!(scan_headers(&["shift - 3"]).shift, "3");
    assert_eq!(scan_headers(&["   SHIFT A"]).shift, "A");
}

#[test]
fn test_header_not_recognised_mid_line() {
    let h = scan_headers(&lines(
        "Laporan 05 oktober 2025\nCatatan shift B ramai\nShifting crew",
    ));
    assert_eq!(h.date, UNKNOWN);
    assert_eq!(h.shift, UNKNOWN);
}

#[test]
fn test_header_last_occurrence_wins() {
    let h = scan_headers(&lines(
        "01-10-2025\nShift A\nJalur A\n16.00 Cek\n02 oktober 2025\nShift B",
    ));
    assert_eq!(h.date, "02 October 2025");
    assert_eq!(h.shift, "B");
}

#[test]
fn test_classify_header_line_priority() {
    assert_eq!(
        classify_header_line("05-10-2025"),
        LineKind::DateLine("05 October 2025".into())
    );
    assert_eq!(
        classify_header_line("Shift C"),
        LineKind::ShiftLine("C".into())
    );
    assert_eq!(classify_header_line("16.00-16.15 Patrol"), LineKind::NoMatch);
}

// ---------------------------
// Activity parser
// ---------------------------

#[test]
fn test_activities_range_and_single() {
    let recs = parse_activities(
        &lines("Jalur A\n16.00-16.15 Patrol check jalur bongkar\n16.20 Istirahat"),
        "05 October 2025",
        "B",
    );

    assert_eq!(recs.len(), 2);

    assert_eq!(recs[0].lane, Lane::A);
    assert_eq!(recs[0].start_time, "16:00");
    assert_eq!(recs[0].end_time, "16:15");
    assert_eq!(recs[0].description, "Patrol check jalur bongkar");
    assert_eq!(recs[0].duration_hours, 0.25);
    assert_eq!(recs[0].date, "05 October 2025");
    assert_eq!(recs[0].shift, "B");

    assert_eq!(recs[1].lane, Lane::A);
    assert_eq!(recs[1].start_time, "16:20");
    assert_eq!(recs[1].end_time, "16:20");
    assert_eq!(recs[1].description, "Istirahat");
    assert_eq!(recs[1].duration_hours, 0.0);
}

#[test]
fn test_activities_before_first_lane_are_dropped() {
    let recs = parse_activities(
        &lines("07.00 Briefing\n06.00-07.00 Serah terima\nJalur A\n08.00 Mulai"),
        UNKNOWN,
        UNKNOWN,
    );
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].description, "Mulai");
}

#[test]
fn test_activities_follow_lane_switches() {
    let recs = parse_activities(
        &lines(
            "jalur a\n08.00 Satu\nJALUR B\n09.00 Dua\nMode Trucking\n10.00 Tiga\nTrucking sore\n11.00 Empat\nJalurA\n12.00 Lima",
        ),
        UNKNOWN,
        UNKNOWN,
    );
    let lanes: Vec<Lane> = recs.iter().map(|r| r.lane).collect();
    assert_eq!(
        lanes,
        vec![Lane::A, Lane::B, Lane::Trucking, Lane::Trucking, Lane::A]
    );
}

#[test]
fn test_activities_ignore_notes_and_incomplete_lines() {
    let recs = parse_activities(
        &lines("Jalur B\ncatatan: aman\n16.00-16.15\n16.00\nShift B\n\n  17.00-17.30   Cek conveyor  "),
        UNKNOWN,
        UNKNOWN,
    );
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].description, "Cek conveyor");
    assert_eq!(recs[0].duration_hours, 0.5);
}

#[test]
fn test_activities_overnight_range() {
    let recs = parse_activities(&lines("Jalur B\n22.00-06.00 Standby malam"), UNKNOWN, UNKNOWN);
    assert_eq!(recs[0].duration_hours, 8.0);
}

#[test]
fn test_activities_out_of_range_times_are_kept_with_zero_duration() {
    let recs = parse_activities(&lines("Jalur A\n25.00-26.30 Aneh"), UNKNOWN, UNKNOWN);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].start_time, "25:00");
    assert_eq!(recs[0].duration_hours, 0.0);
}

#[test]
fn test_lane_header_shapes() {
    assert_eq!(match_lane_header("Jalur A (dermaga)"), Some(Lane::A));
    assert_eq!(match_lane_header("Jalur Ab"), None);
    assert_eq!(match_lane_header("Mode  trucking"), Some(Lane::Trucking));
    assert_eq!(match_lane_header("Truckingan"), None);
    assert_eq!(match_lane_header("Ke jalur A"), None);
}

#[test]
fn test_classify_activity_line_shapes() {
    assert_eq!(
        classify_activity_line("9.05 Cek"),
        LineKind::SingleTimeActivity {
            time: "9:05".into(),
            description: "Cek".into()
        }
    );
    assert_eq!(
        classify_activity_line("17:00 - 17:45 Loading truk"),
        LineKind::TimeRangeActivity {
            start: "17:00".into(),
            end: "17:45".into(),
            description: "Loading truk".into()
        }
    );
    assert_eq!(classify_activity_line("Jalur B"), LineKind::LaneHeader(Lane::B));
    assert_eq!(classify_activity_line("semua aman"), LineKind::NoMatch);
}

// ---------------------------
// Entry points
// ---------------------------

#[test]
fn test_parse_report_sample() {
    let parsed = parse_report(SAMPLE_REPORT);

    assert_eq!(parsed.header.date, "05 October 2025");
    assert_eq!(parsed.header.shift, "B");
    assert_eq!(parsed.records.len(), 4);

    let summary: Vec<(Lane, &str, f64)> = parsed
        .records
        .iter()
        .map(|r| (r.lane, r.description.as_str(), r.duration_hours))
        .collect();

    assert_eq!(
        summary,
        vec![
            (Lane::A, "Patrol check jalur bongkar", 0.25),
            (Lane::A, "Istirahat", 0.0),
            (Lane::B, "Standby malam", 8.0),
            (Lane::Trucking, "Loading truk", 0.75),
        ]
    );
    assert!(parsed.records.iter().all(|r| r.shift == "B"));
}

#[test]
fn test_parse_report_without_lanes_is_empty() {
    let parsed = parse_report("05 oktober 2025\nShift B\n16.00-16.15 Patrol\n");
    assert!(parsed.is_empty());
    assert_eq!(parsed.header.date, "05 October 2025");
}

#[test]
fn test_parse_report_blank_input() {
    assert!(parse_report("").is_empty());
    assert!(parse_report("\n   \n\t\n").is_empty());
}

#[test]
fn test_parse_lane_report_uses_caller_context() {
    let parsed = parse_lane_report(
        "05 oktober 2025\n16.00-16.15 Patrol\nJalur B\n16.20 Istirahat\nnote",
        "06 October 2025",
        Lane::Trucking,
        None,
    );

    assert_eq!(parsed.header.date, "06 October 2025");
    assert_eq!(parsed.header.shift, UNKNOWN);
    assert_eq!(parsed.records.len(), 2);
    assert!(parsed.records.iter().all(|r| r.lane == Lane::Trucking));
    assert!(parsed.records.iter().all(|r| r.date == "06 October 2025"));
}

#[test]
fn test_parse_lane_report_with_shift() {
    let parsed = parse_lane_report("08.00-09.00 Cek", "hari ini", Lane::A, Some(" C "));
    assert_eq!(parsed.records[0].shift, "C");
    assert_eq!(parsed.records[0].duration_hours, 1.0);
}
