use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use runchart_legend::core::{Point, Rect, TimeLine, TimePoint};
use runchart_legend::legend::{ChartMode, LegendConfig, LegendState, LegendStyle, render_legend};
use runchart_legend::render::{Color, NullBuffer, RecordingBuffer, Style};

fn ts(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).single().expect("valid ts")
}

fn line(label: &str, color: Color, values: &[f64]) -> TimeLine {
    let points = values
        .iter()
        .enumerate()
        .map(|(i, value)| TimePoint::new(ts(1_700_000_000 + i as i64), *value).expect("point"));
    TimeLine::with_points(label, color, points).expect("line")
}

fn chart_region() -> Rect {
    Rect::from_size(0, 0, 80, 24)
}

#[test]
fn hidden_legend_performs_no_writes() {
    let lines = vec![
        line("cpu", Color::Green, &[1.0, 2.0]),
        line("mem", Color::Blue, &[3.0]),
    ];
    for mode in [ChartMode::Default, ChartMode::Pinpoint] {
        for details in [false, true] {
            let state = LegendState::new(&lines, mode, LegendConfig::new(false, details), 2);

            let mut recording = RecordingBuffer::new();
            render_legend(&mut recording, chart_region(), &state);
            assert!(recording.is_empty());

            let mut null = NullBuffer::default();
            render_legend(&mut null, chart_region(), &state);
            assert_eq!(null.write_count, 0);
        }
    }
}

#[test]
fn plain_legend_writes_marker_and_label_only() {
    let lines = vec![line("cpu", Color::Green, &[1.0, 2.0, 3.0])];
    let state = LegendState::new(&lines, ChartMode::Default, LegendConfig::new(true, false), 1);

    let mut buffer = RecordingBuffer::new();
    render_legend(&mut buffer, chart_region(), &state);

    // column width = max("cpu", "0.0") = 3, anchor x = 80 - (3 + 10)
    assert_eq!(buffer.len(), 2);
    assert_eq!(buffer.writes[0].text, "•");
    assert_eq!(buffer.writes[0].at, Point::new(65, 1));
    assert_eq!(buffer.writes[0].style, Style::fg(Color::Green));
    assert_eq!(buffer.writes[1].text, "cpu");
    assert_eq!(buffer.writes[1].at, Point::new(67, 1));
    assert_eq!(buffer.writes[1].style, Style::fg(Color::Green));
}

#[test]
fn detailed_legend_writes_four_stat_rows() {
    let lines = vec![line("load", Color::Yellow, &[7.0, 10.0, 14.0])];
    let state = LegendState::new(&lines, ChartMode::Default, LegendConfig::detailed(), 1);

    let mut buffer = RecordingBuffer::new();
    render_legend(&mut buffer, chart_region(), &state);

    // column width = 4 ("load"), anchor x = 80 - 14 = 66
    assert_eq!(buffer.len(), 6);
    assert_eq!(buffer.text_at(Point::new(66, 1)), Some("load"));
    assert_eq!(buffer.text_at(Point::new(66, 2)), Some("cur 14.0"));
    assert_eq!(buffer.text_at(Point::new(66, 3)), Some("max 14.0"));
    assert_eq!(buffer.text_at(Point::new(66, 4)), Some("min 7.0"));
    assert_eq!(buffer.text_at(Point::new(66, 5)), Some("dif 4.0"));

    let detail_style = Style::fg(Color::White);
    assert!(buffer.writes[2..].iter().all(|w| w.style == detail_style));
}

#[test]
fn diff_row_reports_absolute_change_of_last_two_points() {
    let lines = vec![line("temp", Color::Red, &[10.0, 14.0])];
    let state = LegendState::new(&lines, ChartMode::Default, LegendConfig::detailed(), 1);

    let mut buffer = RecordingBuffer::new();
    render_legend(&mut buffer, chart_region(), &state);
    let diffs: Vec<&str> = buffer.texts_with_prefix("dif ").collect();
    assert_eq!(diffs, vec!["dif 4.0"]);

    let falling = vec![line("temp", Color::Red, &[14.0, 10.5])];
    let state = LegendState::new(&falling, ChartMode::Default, LegendConfig::detailed(), 2);
    let mut buffer = RecordingBuffer::new();
    render_legend(&mut buffer, chart_region(), &state);
    let diffs: Vec<&str> = buffer.texts_with_prefix("dif ").collect();
    assert_eq!(diffs, vec!["dif 3.50"]);
}

#[test]
fn short_lines_report_zero_stats() {
    let lines = vec![
        line("single", Color::Cyan, &[5.0]),
        TimeLine::new("empty", Color::Magenta),
    ];
    let state = LegendState::new(&lines, ChartMode::Default, LegendConfig::detailed(), 1);

    let mut buffer = RecordingBuffer::new();
    render_legend(&mut buffer, chart_region(), &state);

    let diffs: Vec<&str> = buffer.texts_with_prefix("dif ").collect();
    assert_eq!(diffs, vec!["dif 0.0", "dif 0.0"]);
    let currents: Vec<&str> = buffer.texts_with_prefix("cur ").collect();
    assert_eq!(currents, vec!["cur 5.0", "cur 0.0"]);
}

#[test]
fn pinpoint_legend_shows_selected_time_and_value() {
    let selected_at = Utc
        .with_ymd_and_hms(2024, 5, 1, 9, 4, 7)
        .single()
        .expect("valid time")
        + TimeDelta::milliseconds(250);
    let mut cpu = TimeLine::new("cpu", Color::Green);
    cpu.push(TimePoint::new(selected_at, 3.25).expect("point"))
        .expect("push");
    cpu.set_selection(cpu.nearest_point(selected_at));
    let lines = vec![cpu];

    // Details are ignored in pinpoint mode.
    let state = LegendState::new(&lines, ChartMode::Pinpoint, LegendConfig::detailed(), 2);
    let mut buffer = RecordingBuffer::new();
    render_legend(&mut buffer, chart_region(), &state);

    // pinpoint column width is fixed to 12, anchor x = 80 - 22 = 58
    assert_eq!(buffer.len(), 4);
    assert_eq!(buffer.text_at(Point::new(56, 1)), Some("•"));
    assert_eq!(buffer.text_at(Point::new(58, 1)), Some("cpu"));
    assert_eq!(buffer.text_at(Point::new(58, 2)), Some("time  09:04:07.250"));
    assert_eq!(buffer.text_at(Point::new(58, 3)), Some("value 3.25"));
}

#[test]
fn pinpoint_time_uses_state_offset() {
    let selected_at = Utc
        .with_ymd_and_hms(2024, 5, 1, 23, 0, 0)
        .single()
        .expect("valid time");
    let mut line = TimeLine::new("cpu", Color::Green);
    line.push(TimePoint::new(selected_at, 1.0).expect("point"))
        .expect("push");
    line.set_selection(line.nearest_point(selected_at));
    let lines = vec![line];

    let offset = chrono::FixedOffset::west_opt(5 * 3600).expect("valid offset");
    let state = LegendState::new(&lines, ChartMode::Pinpoint, LegendConfig::default(), 0)
        .with_time_offset(offset);
    let mut buffer = RecordingBuffer::new();
    render_legend(&mut buffer, chart_region(), &state);

    let times: Vec<&str> = buffer.texts_with_prefix("time ").collect();
    assert_eq!(times, vec!["time  18:00:00.000"]);
}

#[test]
fn pinpoint_line_without_selection_draws_label_only() {
    let lines = vec![line("cpu", Color::Green, &[1.0])];
    let state = LegendState::new(&lines, ChartMode::Pinpoint, LegendConfig::default(), 1);

    let mut buffer = RecordingBuffer::new();
    render_legend(&mut buffer, chart_region(), &state);
    assert_eq!(buffer.len(), 2);
}

#[test]
fn cells_fill_columns_top_down_then_grow_left() {
    let lines: Vec<TimeLine> = (0..5)
        .map(|i| line(&format!("l{i}"), Color::Indexed(i as u8), &[1.0]))
        .collect();
    let state = LegendState::new(&lines, ChartMode::Default, LegendConfig::default(), 0);
    // width 10 -> (10 - 1) / (2 + 1) = 3 rows; column width = 2
    let region = Rect::from_corners(Point::new(100, 5), Point::new(110, 30));

    let mut buffer = RecordingBuffer::new();
    render_legend(&mut buffer, region, &state);

    let labels: Vec<(&str, Point)> = buffer
        .writes
        .iter()
        .filter(|w| w.text.starts_with('l'))
        .map(|w| (w.text.as_str(), w.at))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("l0", Point::new(98, 6)),
            ("l1", Point::new(98, 8)),
            ("l2", Point::new(98, 10)),
            ("l3", Point::new(86, 6)),
            ("l4", Point::new(86, 8)),
        ]
    );
}

#[test]
fn narrow_region_clamps_to_one_row_per_column() {
    let lines = vec![
        line("a", Color::Green, &[1.0, 2.0]),
        line("b", Color::Blue, &[3.0]),
        line("c", Color::Red, &[]),
    ];
    let state = LegendState::new(&lines, ChartMode::Default, LegendConfig::detailed(), 1);
    let region = Rect::from_size(0, 0, 3, 3);

    let mut buffer = RecordingBuffer::new();
    render_legend(&mut buffer, region, &state);

    assert_eq!(buffer.len(), 3 * 6);
    let label_rows: Vec<i32> = ["a", "b", "c"]
        .iter()
        .map(|label| {
            buffer
                .writes
                .iter()
                .find(|w| w.text == *label)
                .expect("label written")
                .at
                .y
        })
        .collect();
    assert_eq!(label_rows, vec![1, 1, 1]);
}

#[test]
fn custom_marker_and_detail_color_are_applied() {
    let lines = vec![line("cpu", Color::Green, &[1.0])];
    let style = LegendStyle {
        marker: '■',
        detail_color: Color::Rgb(128, 128, 128),
    };
    let state = LegendState::new(&lines, ChartMode::Default, LegendConfig::detailed(), 1)
        .with_style(style);

    let mut buffer = RecordingBuffer::new();
    render_legend(&mut buffer, chart_region(), &state);

    assert_eq!(buffer.writes[0].text, "■");
    assert_eq!(buffer.writes[2].style, Style::fg(Color::Rgb(128, 128, 128)));
}
