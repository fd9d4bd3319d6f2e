use std::collections::HashMap;
use std::sync::Arc;

use glue::{Engine, GlueError, Side};
use rand::Rng;

use crate::common::{init_logging, random_samples, Sample};

#[derive(Debug, Default, Clone, glue::Record)]
pub struct Foo {
    pub beta: i64,
    pub alpha: String,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct Bar {
    pub alpha: String,
    pub beta: i64,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct Baz {
    #[glue("b")]
    pub a: i32,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct Paz {
    pub b: i32,
}

/// Same fields as `Sample` minus `f`, all matched through aliases
#[derive(Debug, Default, Clone, glue::Record)]
pub struct Tagged {
    #[glue("a")]
    pub m: i64,
    #[glue("b")]
    pub n: String,
    #[glue("c")]
    pub o: Vec<u8>,
    #[glue("d")]
    pub p: HashMap<String, bool>,
    #[glue("e")]
    pub q: Option<Arc<Vec<i32>>>,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct Narrow {
    pub a: i64,
    pub b: String,
    pub c: Vec<u8>,
    pub d: HashMap<String, bool>,
    pub e: Option<Arc<Vec<i32>>>,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct Hidden {
    #[glue("a")]
    a: i32,
}

impl Hidden {
    fn value(&self) -> i32 {
        self.a
    }
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct Visible {
    pub a: i32,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct Mismatched {
    pub a: String,
    pub b: i32,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct Ignoring {
    #[glue("-")]
    pub a: i32,
    pub b: i32,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct Pair {
    pub a: i32,
    pub b: i32,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct Shadowing {
    #[glue("b")]
    pub a: i32,
    #[glue("a")]
    pub b: i32,
}

#[test]
fn test_glue_basic() {
    init_logging();
    let engine = Engine::default();

    let foo = Foo {
        alpha: "Alfa".to_string(),
        beta: 0,
    };
    let mut bar = Bar {
        alpha: "b".to_string(),
        beta: 128,
    };

    engine.glue(&mut bar, &foo).expect("glue succeeds");
    assert_eq!(bar.alpha, "Alfa");
    assert_eq!(bar.beta, 0);

    // The source is left as it was
    assert_eq!(foo.alpha, "Alfa");
}

#[test]
fn test_glue_alias() {
    let engine = Engine::default();
    let mut baz = Baz { a: -1 };
    let paz = Paz { b: 1997 };

    engine.glue(&mut baz, &paz).expect("glue succeeds");
    assert_eq!(baz.a, 1997);
}

#[test]
fn test_glue_many_types() {
    let engine = Engine::default();
    let sample = random_samples(1).remove(0);
    let mut narrow = Narrow::default();

    engine.glue(&mut narrow, &sample).expect("glue succeeds");
    assert_eq!(narrow.a, sample.a);
    assert_eq!(narrow.b, sample.b);
    assert_eq!(narrow.c, sample.c);
    assert_eq!(narrow.d, sample.d);

    // Shared handles are copied, not their referent
    let (copied, original) = (narrow.e.expect("copied"), sample.e.expect("set"));
    assert!(Arc::ptr_eq(&copied, &original));
}

#[test]
fn test_glue_alias_random() {
    let engine = Engine::default();
    let samples = random_samples(128);
    let mut rng = rand::rng();
    let mut tagged = Tagged::default();

    for _ in 0..samples.len() {
        let sample = &samples[rng.random_range(0..samples.len())];
        engine.glue(&mut tagged, sample).expect("glue succeeds");

        assert_eq!(tagged.m, sample.a);
        assert_eq!(tagged.n, sample.b);
        assert_eq!(tagged.o, sample.c);
        assert_eq!(tagged.p, sample.d);
        assert_eq!(tagged.q, sample.e);
    }
}

#[test]
fn test_unexported_field_untouched() {
    let engine = Engine::default();
    let mut hidden = Hidden { a: 1337 };

    engine
        .glue(&mut hidden, &Visible { a: 16384 })
        .expect("restricted fields are skipped");
    assert_eq!(hidden.value(), 1337);

    // Nor is it read as a source
    let mut visible = Visible { a: 7 };
    engine
        .glue(&mut visible, &hidden)
        .expect("restricted fields are skipped");
    assert_eq!(visible.a, 7);
}

#[test]
fn test_unmatched_fields_untouched() {
    let engine = Engine::default();
    let mut mismatched = Mismatched {
        a: "example string".to_string(),
        b: -1,
    };
    let visible = Visible { a: 9977 };

    // `a` differs in type and `b` has no counterpart; neither is an error
    engine.glue(&mut mismatched, &visible).expect("glue succeeds");
    assert_eq!(mismatched.a, "example string");
    assert_eq!(mismatched.b, -1);
    assert_eq!(visible.a, 9977);
}

#[test]
fn test_ignore_field() {
    let engine = Engine::default();
    let mut ignoring = Ignoring { a: -1, b: 0 };

    engine
        .glue(&mut ignoring, &Pair { a: 1024, b: 512 })
        .expect("glue succeeds");
    assert_eq!(ignoring.a, -1);
    assert_eq!(ignoring.b, 512);
}

#[test]
fn test_alias_swaps_fields() {
    let engine = Engine::default();
    let mut shadowing = Shadowing::default();

    engine
        .glue(&mut shadowing, &Pair { a: 1, b: 2 })
        .expect("glue succeeds");
    assert_eq!(shadowing.a, 2);
    assert_eq!(shadowing.b, 1);
}

#[test]
fn test_same_record_type() {
    let engine = Engine::default();
    let source = random_samples(1).remove(0);
    let mut copy = Sample::default();

    engine.glue(&mut copy, &source).expect("glue succeeds");
    assert_eq!(copy, source);
}

#[test]
fn test_glue_any() {
    let engine = Engine::default();
    let mut baz = Baz::default();
    let paz = Paz { b: 42 };

    let dst: &mut dyn std::any::Any = &mut baz;
    engine.glue_any(dst, &paz, &[]).expect("both are records");
    assert_eq!(baz.a, 42);
}

#[test]
fn test_invalid_arguments_leave_destination_untouched() {
    let engine = Engine::default();
    let mut a = 0_i32;
    let b = "1024".to_string();
    let mut baz = Baz { a: 5 };

    assert_eq!(
        engine.glue_any(&mut a, &b, &[]),
        Err(GlueError::InvalidArgument {
            side: Side::Destination
        })
    );
    assert_eq!(
        engine.glue_any(&mut baz, &b, &[]),
        Err(GlueError::InvalidArgument { side: Side::Source })
    );
    assert_eq!(baz.a, 5);

    // A boxed record is not itself a record
    let boxed = Box::new(Paz { b: 1 });
    assert_eq!(
        engine.glue_any(&mut baz, &boxed, &[]),
        Err(GlueError::InvalidArgument { side: Side::Source })
    );
    assert_eq!(a, 0);
}
