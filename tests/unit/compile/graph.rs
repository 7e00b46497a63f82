use super::*;

#[test]
fn records_chain_and_branch_inputs() {
    let compiled = compile_graph(
        &[
            EffectDescriptor::host_backdrop(),
            EffectDescriptor::blur(5.0),
            EffectDescriptor::blend(
                vec![EffectDescriptor::solid_color(Color::RED)],
                BlendMode::Multiply,
                Placement::Foreground,
            ),
        ],
        &CompileOptions::default(),
    )
    .unwrap();

    let graph = &compiled.graph;
    assert_eq!(
        graph.calls(),
        vec!["host_backdrop", "blur", "solid_color", "blend"]
    );
    assert_eq!(compiled.root, NodeId(3));

    let blend = graph.node(compiled.root).unwrap();
    assert_eq!(blend.inputs, vec![NodeId(1), NodeId(2)]);
    assert_eq!(graph.node(NodeId(1)).unwrap().inputs, vec![NodeId(0)]);
    assert!(graph.node(NodeId(2)).unwrap().inputs.is_empty());
    assert_eq!(graph.depth(compiled.root).unwrap(), 3);
}

#[test]
fn host_acrylic_drops_blur_amount() {
    let compiled = compile_graph(
        &[EffectDescriptor::acrylic(
            crate::effects::descriptor::BackdropKind::HostBackdrop,
            Color::WHITE,
            0.4,
            9.0,
        )],
        &CompileOptions::default(),
    )
    .unwrap();
    assert_eq!(
        compiled.graph.nodes[0].op,
        NodeOp::HostBackdropAcrylic {
            tint: Color::WHITE,
            tint_mix: 0.4,
            texture_uri: None,
        }
    );
}

#[test]
fn count_and_unknown_ids() {
    let compiled = compile_graph(
        &[
            EffectDescriptor::backdrop(),
            EffectDescriptor::blur(1.0),
            EffectDescriptor::blur(2.0),
        ],
        &CompileOptions::default(),
    )
    .unwrap();
    assert_eq!(compiled.graph.count("blur"), 2);
    assert_eq!(compiled.graph.count("blend"), 0);
    assert!(compiled.graph.depth(NodeId(99)).is_err());
}

#[test]
fn serializes_ops_by_name() {
    let compiled = compile_graph(
        &[EffectDescriptor::backdrop(), EffectDescriptor::luminance()],
        &CompileOptions::default(),
    )
    .unwrap();
    let v = serde_json::to_value(&compiled).unwrap();
    assert_eq!(v["root"], serde_json::json!(1));
    assert_eq!(v["graph"]["nodes"][1]["op"], "luminance_to_alpha");
    assert_eq!(v["graph"]["nodes"][1]["inputs"], serde_json::json!([0]));
}

#[test]
fn node_params_sit_next_to_op_name() {
    let compiled = compile_graph(
        &[
            EffectDescriptor::host_backdrop(),
            EffectDescriptor::blur(12.0),
        ],
        &CompileOptions::default(),
    )
    .unwrap();
    let v = serde_json::to_value(&compiled.graph.nodes[1]).unwrap();
    assert_eq!(
        v,
        serde_json::json!({ "op": "blur", "value": 12.0, "inputs": [0] })
    );
}
