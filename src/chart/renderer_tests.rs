//! Tests for the grouped bar chart renderer.

use super::*;
use crate::chart::data::{Count, Dataset, Observation};
use crate::chart::hash_color;

fn sample_data() -> Vec<Observation> {
    vec![
        Observation::new("Product A", "January", 25),
        Observation::new("Product B", "January", 15),
        Observation::new("Product A", "February", 30),
        Observation::new("Product B", "February", 22),
    ]
}

mod construction_tests {
    use super::*;

    #[test]
    fn initializes_with_defaults() {
        let chart = BarChart::new(sample_data(), "Test Chart");
        assert_eq!(chart.title(), "Test Chart");
        assert_eq!(chart.width(), 400);
        assert_eq!(chart.height(), 300);
        assert_eq!(chart.data().len(), 4);
    }

    #[test]
    fn sets_dimensions() {
        let mut chart = BarChart::new(sample_data(), "Test Chart");
        chart.set_dimensions(800, 600);
        assert_eq!((chart.width(), chart.height()), (800, 600));
    }

    #[test]
    fn initializes_default_colors_for_subjects() {
        let chart = BarChart::new(sample_data(), "Barchart");
        let colors: Vec<_> = chart.colors().iter().collect();
        assert_eq!(
            colors,
            vec![("Product A", "#4285F4"), ("Product B", "#EA4335")]
        );
    }

    #[test]
    fn custom_colors_override_defaults() {
        let mut chart = BarChart::new(sample_data(), "Barchart");
        chart.set_colors([("Product A", "#FF0000")]);
        assert_eq!(chart.color_for("Product A"), "#FF0000");
        assert_eq!(chart.color_for("  product a"), "#FF0000");
    }

    #[test]
    fn unknown_subject_color_is_consistent() {
        let chart = BarChart::new(Dataset::default(), "Barchart");
        assert_eq!(chart.color_for("Unknown"), chart.color_for("Unknown"));
        assert!(chart.colors().is_empty());
    }
}

mod render_tests {
    use super::*;

    #[test]
    fn generates_valid_svg() {
        let svg = BarChart::new(sample_data(), "Barchart").render();
        assert!(svg.starts_with(r#"<?xml version="1.0" standalone="no"?>"#));
        assert!(svg.contains("svg11.dtd"));
        assert!(svg.contains("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 400 300""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn includes_title_twice() {
        let svg = BarChart::new(sample_data(), "Custom Chart Title").render();
        assert!(svg.contains("<title>Custom Chart Title</title>"));
        assert!(svg.contains(r#"font-size="20">Custom Chart Title</text>"#));
    }

    #[test]
    fn includes_all_data_points() {
        let svg = BarChart::new(sample_data(), "Barchart").render();
        for obs in sample_data() {
            assert!(svg.contains(&obs.drawn_count().to_string()));
            assert!(svg.contains(obs.subject_label()));
            assert!(svg.contains(obs.time_slice_label()));
        }
    }

    #[test]
    fn groups_appear_in_first_encountered_order() {
        let svg = BarChart::new(sample_data(), "Barchart").render();
        let jan = svg.find(">January</text>").unwrap();
        let feb = svg.find(">February</text>").unwrap();
        assert!(jan < feb);
    }

    #[test]
    fn bars_use_assigned_colors() {
        let svg = BarChart::new(sample_data(), "Barchart").render();
        assert!(svg.contains(
            r##"<rect x="70" y="83.33333333333331" width="20" height="166.66666666666669" fill="#4285F4"/>"##
        ));
    }

    #[test]
    fn draws_axes_and_gridlines() {
        let svg = BarChart::new(sample_data(), "Barchart").render();
        assert!(svg.contains(r##"<line x1="50" y1="250" x2="350" y2="250" stroke="#333" stroke-width="2"/>"##));
        assert!(svg.contains(r##"<line x1="50" y1="50" x2="50" y2="250" stroke="#333" stroke-width="2"/>"##));
        assert!(svg.contains(r##"<line x1="50" y1="50" x2="350" y2="50" stroke="#ccc" stroke-dasharray="2,2"/>"##));
        assert!(svg.contains(r#"text-anchor="end">30</text>"#));
    }

    #[test]
    fn legend_lists_subjects_in_order() {
        let svg = BarChart::new(sample_data(), "Barchart").render();
        assert!(svg.contains(r##"<rect x="250" y="20" width="15" height="15" fill="#4285F4"/>"##));
        assert!(svg.contains(r##"<rect x="250" y="40" width="15" height="15" fill="#EA4335"/>"##));
        let a = svg.find(r#"y="32" font-family="Arial" font-size="12">Product A</text>"#);
        let b = svg.find(r#"y="52" font-family="Arial" font-size="12">Product B</text>"#);
        assert!(a.unwrap() < b.unwrap());
    }

    #[test]
    fn legend_falls_back_to_gray_but_bars_use_hash() {
        // Legend lookups are exact, bar lookups are normalized.
        let mut chart = BarChart::new(vec![Observation::new("Solo", "Q1", 3)], "Barchart");
        chart.colors = ColorMap::new();
        chart.set_colors([("solo", "#123456")]);

        let svg = chart.render();
        assert!(svg.contains("fill=\"#123456\"/>"));
        assert!(svg.contains(r##"width="15" height="15" fill="#999"/>"##));
    }

    #[test]
    fn bars_without_map_entry_use_hash_color() {
        let mut chart = BarChart::new(vec![Observation::new("Solo", "Q1", 3)], "Barchart");
        chart.colors = ColorMap::new();

        let svg = chart.render();
        let expected = format!(r#"width="20" height="200" fill="{}"/>"#, hash_color("Solo"));
        assert!(svg.contains(&expected));
    }

    #[test]
    fn escapes_user_text() {
        let data = vec![Observation::new("R&D <core>", "Q1 \"draft\"", 1)];
        let svg = BarChart::new(data, "<script>alert('xss')</script>").render();

        assert!(svg.contains("&lt;script&gt;alert(&apos;xss&apos;)&lt;/script&gt;"));
        assert!(svg.contains("R&amp;D &lt;core&gt;"));
        assert!(svg.contains("Q1 &quot;draft&quot;"));
        assert!(!svg.contains("<script>"));
    }

    #[test]
    fn render_is_repeatable() {
        let mut chart = BarChart::new(sample_data(), "Barchart");
        assert_eq!(chart.render(), chart.render());
    }
}

mod degenerate_tests {
    use super::*;

    #[test]
    fn empty_dataset_renders_placeholder() {
        let svg = BarChart::new(Dataset::default(), "Empty Chart").render();

        assert!(svg.starts_with(r#"<?xml version="1.0" standalone="no"?>"#));
        assert!(svg.contains(EMPTY_MESSAGE));
        assert!(svg.contains("<title>Empty Chart</title>"));
        assert!(svg.contains(r#"x="50%" y="50%""#));
        assert!(!svg.contains("<line"));
        assert!(!svg.contains("width=\"20\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn empty_title_still_writes_title_element() {
        let svg = BarChart::new(Dataset::default(), "").render();
        assert!(svg.contains("<title></title>"));

        let svg = BarChart::new(vec![Observation::new("A", "Jan", 1)], "").render();
        assert!(svg.contains("<title></title>"));
    }

    #[test]
    fn missing_counts_still_render_time_slice() {
        let data = vec![
            Observation {
                subject: Some("Product A".to_string()),
                time_slice: Some("January".to_string()),
                count: None,
            },
            Observation {
                subject: Some("Product B".to_string()),
                time_slice: Some("January".to_string()),
                count: None,
            },
        ];
        let svg = BarChart::new(data, "Barchart").render();
        assert!(svg.contains("January"));
        assert!(svg.contains(r#"height="0""#));
    }

    #[test]
    fn zero_counts_render_at_baseline() {
        let data = vec![
            Observation::new("Product A", "January", 0),
            Observation::new("Product B", "February", 0),
        ];
        let mut chart = BarChart::new(data, "Barchart");
        let svg = chart.render();

        let baseline = chart.height() - 50;
        assert!(svg.contains(&format!(r#"y="{baseline}" width="20" height="0""#)));
        assert!(svg.contains("Product A"));
        assert!(svg.contains("Product B"));
    }

    #[test]
    fn non_numeric_count_draws_as_zero() {
        let data = vec![
            Observation::new("A", "Jan", Count::Text("n/a".to_string())),
            Observation::new("B", "Jan", 10),
        ];
        let svg = BarChart::new(data, "Barchart").render();
        assert!(svg.contains(r#"text-anchor="middle">0</text>"#));
        assert!(svg.contains(r#"text-anchor="middle">10</text>"#));
    }

    #[test]
    fn huge_count_fills_plot_with_decimal_label() {
        let data = vec![Observation::new("A", "Jan", 1e20)];
        let svg = BarChart::new(data, "T").render();
        assert!(svg.contains(r#"<rect x="70" y="50" width="20" height="200""#));
        assert!(svg.contains(r#"text-anchor="middle">100000000000000000000</text>"#));
    }

    #[test]
    fn leading_digit_and_boolean_counts_are_drawn() {
        let data = vec![
            Observation::new("A", "Jan", Count::Text("12abc".to_string())),
            Observation::new("B", "Jan", Count::Bool(true)),
            Observation::new("C", "Jan", 20),
        ];
        let svg = BarChart::new(data, "Barchart").render();
        // 12 / 20 * 200 and 1 / 20 * 200
        assert!(svg.contains(r#"y="130" width="20" height="120""#));
        assert!(svg.contains(r#"y="240" width="20" height="10""#));
        assert!(svg.contains(r#"text-anchor="middle">12</text>"#));
    }

    #[test]
    fn colors_are_escaped_in_fill_attributes() {
        let data = vec![Observation::new("A", "Jan", 5)];
        let mut chart = BarChart::new(data, "Barchart");
        chart.set_colors([("A", r#"red"/><script/>"#)]);
        let svg = chart.render();
        assert!(svg.contains(r#"fill="red&quot;/&gt;&lt;script/&gt;""#));
        assert!(!svg.contains("<script/>"));
    }

    #[test]
    fn absent_subject_draws_without_legend_row() {
        let data = vec![Observation {
            subject: None,
            time_slice: None,
            count: Some(Count::Number(4.0)),
        }];
        let mut chart = BarChart::new(data, "Barchart");
        let svg = chart.render();

        assert!(svg.contains(">Unknown</text>"));
        assert!(chart.colors().is_empty());
        assert!(!svg.contains(r#"width="15""#));
        assert!(svg.contains(&hash_color("")));
    }
}

mod widening_tests {
    use super::*;

    #[test]
    fn widens_for_many_groups() {
        let data: Vec<_> = (0..20)
            .map(|i| Observation::new(format!("Product {i}"), format!("Month {i}"), i * 10))
            .collect();
        let mut chart = BarChart::new(data, "Barchart");
        let initial = chart.width();
        let svg = chart.render();

        assert!(chart.width() > initial);
        assert_eq!(chart.width(), 1300);
        assert_eq!(chart.height(), 300);
        assert!(svg.contains(r#"viewBox="0 0 1300 300""#));
    }

    #[test]
    fn keeps_width_when_data_fits() {
        let mut chart = BarChart::new(sample_data(), "Barchart");
        chart.render();
        assert_eq!(chart.width(), 400);
    }

    #[test]
    fn never_shrinks_explicit_width() {
        let mut chart = BarChart::new(sample_data(), "Barchart").with_dimensions(1000, 500);
        chart.render();
        assert_eq!((chart.width(), chart.height()), (1000, 500));
    }

    #[test]
    fn widened_width_persists_until_reset() {
        let data: Vec<_> = (0..10)
            .map(|i| Observation::new("A", format!("T{i}"), 1))
            .collect();
        let mut chart = BarChart::new(data, "Barchart");
        chart.render();
        assert_eq!(chart.width(), 700);

        chart.set_dimensions(400, 300);
        assert_eq!(chart.width(), 400);
        chart.render();
        assert_eq!(chart.width(), 700);
    }
}

mod file_tests {
    use super::*;

    #[test]
    fn saves_svg_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let mut chart = BarChart::new(sample_data(), "Barchart");

        assert!(chart.render_to_file(&path));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, chart.render());
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        std::fs::write(&path, "stale").unwrap();

        assert!(BarChart::new(sample_data(), "Barchart").render_to_file(&path));
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("<?xml"));
    }

    #[test]
    fn write_failure_returns_false() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("chart.svg");
        let mut chart = BarChart::new(sample_data(), "Barchart");

        assert!(!chart.render_to_file(&path));
        let err = chart.try_render_to_file(&path).unwrap_err();
        assert!(matches!(err, SvgChartsError::FileWrite { .. }));
    }
}
