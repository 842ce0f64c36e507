mod graph_render {
    use ffgraph::{Filter, FilterChain, FilterGraph};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    #[test]
    fn split_select_trim_scale_renders_bit_exact() {
        init_tracing();

        let mut graph = FilterGraph::new();
        let chain = graph.append_filter(
            Filter::builder("split")
                .input("0:v")
                .output(["a", "b"])
                .build()
                .unwrap(),
        );
        let split = &chain[0];
        let (link_a, link_b) = (split.output()[0].clone(), split.output()[1].clone());

        graph.append_filter(
            Filter::builder("select")
                .arg("eq(n, 0)")
                .input(link_a)
                .output("c")
                .build()
                .unwrap(),
        );
        graph.append([
            Filter::builder("trim")
                .kwarg("start_frame", 10)
                .kwarg("end_frame", 150)
                .input(link_b)
                .build()
                .unwrap(),
            Filter::builder("scale")
                .arg(1280)
                .arg(-1)
                .output("d")
                .build()
                .unwrap(),
        ]);

        assert_eq!(
            graph.render(),
            r"[0:v]split[a][b];[a]select='eq(n\, 0)'[c];[b]trim=start_frame=10:end_frame=150,scale=1280:-1[d]"
        );
    }

    #[test]
    fn overlay_graph_with_multiple_input_pads() {
        let mut graph = FilterGraph::new();
        graph.append_filter(
            Filter::builder("overlay")
                .kwarg("x", 10)
                .kwarg("y", 20)
                .input(["base", "logo"])
                .output("out")
                .build()
                .unwrap(),
        );
        assert_eq!(graph.render(), "[base][logo]overlay=x=10:y=20[out]");
    }

    #[test]
    fn topology_is_expressed_by_pad_name_equality() {
        // Both sides hold their own link; only the name is shared.
        let mut graph = FilterGraph::new();
        graph.append_filter(
            Filter::builder("fps")
                .arg(30)
                .input("0:v")
                .output("v30")
                .build()
                .unwrap(),
        );
        graph.append_filter(
            Filter::builder("scale")
                .arg(640)
                .arg(-1)
                .input("v30")
                .output("small")
                .build()
                .unwrap(),
        );
        assert_eq!(graph.render(), "[0:v]fps=30[v30];[v30]scale=640:-1[small]");
    }

    #[test]
    fn render_is_repeatable_and_side_effect_free() {
        let mut graph = FilterGraph::new();
        graph.append([
            Filter::new("trim").unwrap(),
            Filter::builder("scale").arg(1280).arg(-1).build().unwrap(),
        ]);
        let first = graph.render();
        let second = graph.render();
        assert_eq!(first, second);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn graph_survives_serde_round_trip() {
        let mut graph = FilterGraph::new();
        graph.append_filter(
            Filter::builder("select")
                .arg("eq(n, 0)")
                .input("a")
                .output("c")
                .build()
                .unwrap(),
        );
        graph.append(None::<FilterChain>);

        let json = serde_json::to_string(&graph).unwrap();
        let back: FilterGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, graph);
        assert_eq!(back.render(), graph.render());
    }
}
