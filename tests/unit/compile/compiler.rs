use super::*;
use crate::{
    effects::descriptor::{BlendMode, CacheMode, DpiMode, Placement},
    foundation::core::Color,
};

#[derive(Default)]
struct MockBackend {
    calls: Vec<&'static str>,
    fail_on: Option<&'static str>,
}

impl MockBackend {
    fn node(&mut self, call: &'static str) -> FxResult<usize> {
        if self.fail_on == Some(call) {
            return Err(FxError::Other(anyhow::anyhow!("{call} failed")));
        }
        self.calls.push(call);
        Ok(self.calls.len())
    }
}

impl EffectBackend for MockBackend {
    type Node = usize;

    fn backdrop(&mut self) -> FxResult<usize> {
        self.node("backdrop")
    }

    fn host_backdrop(&mut self) -> FxResult<usize> {
        self.node("host_backdrop")
    }

    fn solid_color(&mut self, _color: Color) -> FxResult<usize> {
        self.node("solid_color")
    }

    fn image(&mut self, _uri: &str, _dpi: DpiMode, _cache: CacheMode) -> FxResult<usize> {
        self.node("image")
    }

    fn tiles(&mut self, _uri: &str, _dpi: DpiMode, _cache: CacheMode) -> FxResult<usize> {
        self.node("tiles")
    }

    fn backdrop_acrylic(
        &mut self,
        _tint: Color,
        _tint_mix: f64,
        _blur_amount: f64,
        _texture_uri: Option<&str>,
    ) -> FxResult<usize> {
        self.node("backdrop_acrylic")
    }

    fn host_backdrop_acrylic(
        &mut self,
        _tint: Color,
        _tint_mix: f64,
        _texture_uri: Option<&str>,
    ) -> FxResult<usize> {
        self.node("host_backdrop_acrylic")
    }

    fn opacity(&mut self, _upstream: usize, _value: f64) -> FxResult<usize> {
        self.node("opacity")
    }

    fn luminance_to_alpha(&mut self, _upstream: usize) -> FxResult<usize> {
        self.node("luminance_to_alpha")
    }

    fn tint(&mut self, _upstream: usize, _color: Color, _opacity: f64) -> FxResult<usize> {
        self.node("tint")
    }

    fn blur(&mut self, _upstream: usize, _value: f64) -> FxResult<usize> {
        self.node("blur")
    }

    fn saturation(&mut self, _upstream: usize, _value: f64) -> FxResult<usize> {
        self.node("saturation")
    }

    fn blend(
        &mut self,
        _upstream: usize,
        _branch: usize,
        _mode: BlendMode,
        _placement: Placement,
    ) -> FxResult<usize> {
        self.node("blend")
    }
}

fn red_branch() -> EffectDescriptor {
    EffectDescriptor::blend(
        vec![EffectDescriptor::solid_color(Color::RED)],
        BlendMode::Multiply,
        Placement::Foreground,
    )
}

#[test]
fn every_source_accepts_every_transform() {
    let sources = [
        EffectDescriptor::backdrop(),
        EffectDescriptor::host_backdrop(),
        EffectDescriptor::solid_color(Color::WHITE),
        EffectDescriptor::image("a.png"),
        EffectDescriptor::tiles("noise.png"),
        EffectDescriptor::acrylic(BackdropKind::Backdrop, Color::WHITE, 0.6, 0.3),
        EffectDescriptor::acrylic(BackdropKind::HostBackdrop, Color::BLACK, 0.8, 0.0),
    ];
    let transforms = vec![
        EffectDescriptor::opacity(0.5),
        EffectDescriptor::luminance(),
        EffectDescriptor::tint(Color::RED, 0.3),
        EffectDescriptor::blur(4.0),
        EffectDescriptor::saturation(0.2),
        red_branch(),
    ];

    for source in sources {
        let mut effects = vec![source];
        effects.extend(transforms.iter().cloned());
        let mut backend = MockBackend::default();
        let root = compile(&mut backend, &effects).unwrap();
        assert_eq!(root, backend.calls.len());
        assert_eq!(backend.calls.len(), 8);
    }
}

#[test]
fn empty_pipeline_is_rejected() {
    let mut backend = MockBackend::default();
    let err = compile(&mut backend, &[]).unwrap_err();
    assert!(matches!(err, FxError::EmptyPipeline));
    assert!(backend.calls.is_empty());
}

#[test]
fn transform_first_is_invalid_source() {
    let mut backend = MockBackend::default();
    let err = compile(
        &mut backend,
        &[EffectDescriptor::blur(2.0), EffectDescriptor::opacity(1.0)],
    )
    .unwrap_err();
    match err {
        FxError::InvalidSource { tag } => assert_eq!(tag, "blur"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(backend.calls.is_empty());
}

#[test]
fn unknown_backdrop_is_invalid_source() {
    let mut backend = MockBackend::default();
    let err = compile(
        &mut backend,
        &[EffectDescriptor::Backdrop {
            source: BackdropKind::Unknown,
        }],
    )
    .unwrap_err();
    assert!(matches!(err, FxError::InvalidSource { .. }));
}

#[test]
fn source_after_first_is_invalid_transform() {
    let mut backend = MockBackend::default();
    let err = compile(
        &mut backend,
        &[
            EffectDescriptor::backdrop(),
            EffectDescriptor::blur(1.0),
            EffectDescriptor::solid_color(Color::RED),
        ],
    )
    .unwrap_err();
    match err {
        FxError::InvalidTransform { index, tag } => {
            assert_eq!(index, 2);
            assert_eq!(tag, "solid_color");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(backend.calls.is_empty());
}

#[test]
fn blend_branch_is_compiled_once_between_chain_and_blend() {
    let mut backend = MockBackend::default();
    compile(
        &mut backend,
        &[
            EffectDescriptor::host_backdrop(),
            EffectDescriptor::blur(5.0),
            red_branch(),
        ],
    )
    .unwrap();
    assert_eq!(
        backend.calls,
        vec!["host_backdrop", "blur", "solid_color", "blend"]
    );
}

#[test]
fn acrylic_dispatches_on_source() {
    let mut backend = MockBackend::default();
    compile(
        &mut backend,
        &[EffectDescriptor::acrylic(
            BackdropKind::Backdrop,
            Color::WHITE,
            0.6,
            0.3,
        )],
    )
    .unwrap();
    compile(
        &mut backend,
        &[EffectDescriptor::acrylic(
            BackdropKind::HostBackdrop,
            Color::WHITE,
            0.6,
            123.0,
        )],
    )
    .unwrap();
    assert_eq!(
        backend.calls,
        vec!["backdrop_acrylic", "host_backdrop_acrylic"]
    );
}

#[test]
fn unknown_acrylic_source_is_rejected() {
    let mut backend = MockBackend::default();
    let err = compile(
        &mut backend,
        &[EffectDescriptor::acrylic(
            BackdropKind::Unknown,
            Color::WHITE,
            0.6,
            0.3,
        )],
    )
    .unwrap_err();
    assert!(matches!(err, FxError::InvalidAcrylicSource { .. }));
    assert!(backend.calls.is_empty());
}

#[test]
fn invalid_branch_fails_before_any_backend_call() {
    let mut backend = MockBackend::default();
    let err = compile(
        &mut backend,
        &[
            EffectDescriptor::backdrop(),
            EffectDescriptor::blur(1.0),
            EffectDescriptor::blend(vec![], BlendMode::Screen, Placement::Background),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, FxError::EmptyPipeline));
    assert!(backend.calls.is_empty());

    let err = compile(
        &mut backend,
        &[
            EffectDescriptor::backdrop(),
            EffectDescriptor::blend(
                vec![EffectDescriptor::opacity(0.5)],
                BlendMode::Screen,
                Placement::Background,
            ),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, FxError::InvalidSource { .. }));
    assert!(backend.calls.is_empty());
}

#[test]
fn backend_failures_pass_through() {
    let mut backend = MockBackend {
        fail_on: Some("image"),
        ..MockBackend::default()
    };
    let err = compile(
        &mut backend,
        &[EffectDescriptor::image("missing.png"), EffectDescriptor::blur(1.0)],
    )
    .unwrap_err();
    assert!(matches!(err, FxError::Other(_)));
    assert!(err.to_string().contains("image failed"));
}

#[test]
fn branch_depth_is_limited() {
    let mut effects = vec![EffectDescriptor::backdrop()];
    for _ in 0..3 {
        effects = vec![
            EffectDescriptor::backdrop(),
            EffectDescriptor::blend(effects, BlendMode::Multiply, Placement::Foreground),
        ];
    }

    let opts = CompileOptions {
        max_branch_depth: 2,
    };
    let err = validate_pipeline(&effects, &opts).unwrap_err();
    assert!(matches!(err, FxError::Validation(_)));

    let shape = validate_pipeline(&effects, &CompileOptions::default()).unwrap();
    assert_eq!(shape.max_depth, 3);
    assert_eq!(shape.blends, 3);
    assert_eq!(shape.sources, 4);
}

#[test]
fn validate_reports_shape() {
    let shape = validate_pipeline(
        &[
            EffectDescriptor::host_backdrop(),
            EffectDescriptor::blur(5.0),
            red_branch(),
        ],
        &CompileOptions::default(),
    )
    .unwrap();
    assert_eq!(
        shape,
        PipelineShape {
            sources: 2,
            transforms: 2,
            blends: 1,
            max_depth: 1,
        }
    );
}
