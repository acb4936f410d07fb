use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zenith_compiler_html::{compile_block, export_document, render_canvas, ExportOptions};
use zenith_evaluator::RenderOptions;
use zenith_schema::{Block, BlockType};

fn full_page() -> Vec<Block> {
    BlockType::ALL
        .iter()
        .enumerate()
        .map(|(i, block_type)| Block::new(format!("b{}", i), *block_type))
        .collect()
}

fn compile_single_block(c: &mut Criterion) {
    let block = Block::new("b1", BlockType::Pricing);

    c.bench_function("compile_single_block", |b| {
        b.iter(|| compile_block(black_box(&block)))
    });
}

fn export_full_page(c: &mut Criterion) {
    let blocks = full_page();
    let options = ExportOptions::default();

    c.bench_function("export_full_page", |b| {
        b.iter(|| export_document(black_box(&blocks), &options))
    });
}

fn render_full_canvas(c: &mut Criterion) {
    let blocks = full_page();

    c.bench_function("render_full_canvas", |b| {
        b.iter(|| render_canvas(black_box(&blocks), Some("b3"), &RenderOptions::interactive()))
    });
}

criterion_group!(benches, compile_single_block, export_full_page, render_full_canvas);
criterion_main!(benches);
