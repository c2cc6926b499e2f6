use bytestruct_layout::{
    compile, grammar, sizing, ByteOrder, Layout, LayoutError, OverflowKind, ScalarType,
    SyntaxErrorKind,
};

fn is_syntax(result: Result<Layout, LayoutError>) -> bool {
    matches!(result, Err(LayoutError::Syntax { .. }))
}

#[test]
fn reference_layout_matches_packed_struct() {
    let layout = compile("bI[4]f", ByteOrder::BigEndian).unwrap();
    assert_eq!(
        layout.total_size(),
        std::mem::size_of::<i8>() + std::mem::size_of::<u32>() * 4 + std::mem::size_of::<f32>()
    );

    let fields: Vec<_> = layout
        .fields()
        .iter()
        .map(|f| (f.offset(), f.count(), f.scalar()))
        .collect();
    assert_eq!(
        fields,
        vec![
            (0, 1, ScalarType::Int8),
            (1, 4, ScalarType::UInt32),
            (17, 1, ScalarType::Float32),
        ]
    );
}

#[test]
fn invalid_counts_are_syntax_errors() {
    assert!(is_syntax(compile("bI[-4]f", ByteOrder::BigEndian)));
    assert!(is_syntax(compile("bI[]f", ByteOrder::BigEndian)));
    assert!(is_syntax(compile("bI[4.0]f", ByteOrder::BigEndian)));
    assert!(is_syntax(compile("bI[ 4]f", ByteOrder::BigEndian)));
}

#[test]
fn max_count_overflows() {
    let format = format!("bI[{}]f", usize::MAX);
    assert_eq!(
        compile(&format, ByteOrder::BigEndian),
        Err(LayoutError::Overflow(OverflowKind::Span))
    );

    let format = format!("bI[{}]f", usize::MAX - 1);
    assert_eq!(
        compile(&format, ByteOrder::BigEndian),
        Err(LayoutError::Overflow(OverflowKind::Span))
    );
}

#[test]
fn span_threshold_is_exact() {
    let threshold = usize::MAX / 4;

    let format = format!("I[{}]", threshold + 1);
    assert_eq!(
        compile(&format, ByteOrder::BigEndian),
        Err(LayoutError::Overflow(OverflowKind::Span))
    );

    let format = format!("I[{threshold}]");
    let layout = compile(&format, ByteOrder::BigEndian).unwrap();
    assert_eq!(layout.total_size(), threshold * 4);
}

#[test]
fn total_threshold_is_exact() {
    // One int8 and one float32 around the array leave 5 bytes of headroom.
    let largest = (usize::MAX - 5) / 4;

    let format = format!("bI[{largest}]f");
    let layout = compile(&format, ByteOrder::Sortable).unwrap();
    assert_eq!(layout.total_size(), 1 + largest * 4 + 4);
    assert_eq!(layout.field(2).unwrap().offset(), 1 + largest * 4);

    let format = format!("bI[{}]f", largest + 1);
    assert_eq!(
        compile(&format, ByteOrder::Sortable),
        Err(LayoutError::Overflow(OverflowKind::Total))
    );

    let format = format!("bI[{}]f", usize::MAX / 4);
    assert_eq!(
        compile(&format, ByteOrder::Sortable),
        Err(LayoutError::Overflow(OverflowKind::Total))
    );
}

#[test]
fn count_digits_beyond_usize_overflow() {
    let format = format!("B[{}9]", usize::MAX);
    assert_eq!(
        compile(&format, ByteOrder::BigEndian),
        Err(LayoutError::Overflow(OverflowKind::Count))
    );
}

#[test]
fn empty_inputs_are_rejected() {
    assert_eq!(compile("", ByteOrder::BigEndian), Err(LayoutError::Empty));
}

#[test]
fn compilation_is_deterministic() {
    let a = compile("cH[3]lp[2]d", ByteOrder::LittleEndian).unwrap();
    let b = compile("cH[3]lp[2]d", ByteOrder::LittleEndian).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.total_size(), b.total_size());
}

#[test]
fn passes_can_run_independently() {
    assert_eq!(grammar::validate("hH[2]").unwrap(), 2);
    let sizing = sizing::compute("hH[2]").unwrap();
    assert_eq!(sizing.total_size, 6);
    assert_eq!(sizing.fields.len(), 2);

    assert!(matches!(
        grammar::validate("h["),
        Err(LayoutError::Syntax {
            kind: SyntaxErrorKind::Unterminated,
            ..
        })
    ));
}

#[test]
fn every_tag_compiles_alone() {
    for scalar in ScalarType::ALL {
        let format = scalar.tag().to_string();
        let layout = compile(&format, ByteOrder::BigEndian).unwrap();
        assert_eq!(layout.total_size(), scalar.width());
        assert_eq!(layout.field(0).unwrap().scalar(), scalar);
    }
}

#[test]
fn shared_across_threads() {
    let layout = std::sync::Arc::new(compile("L[8]", ByteOrder::Sortable).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let layout = std::sync::Arc::clone(&layout);
            std::thread::spawn(move || layout.total_size())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 64);
    }
}
