use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use xcover::cover::column_selection::{ColumnSelection, DeclarationOrder, FewestCandidates};
use xcover::cover::matrix::Matrix;
use xcover::cover::search::Search;
use xcover::sudoku::solver::{
    Board, Shape, Sudoku, EXAMPLE_FOUR, EXAMPLE_NINE, EXAMPLE_SEVENTEEN_CLUE,
};

fn nine(grid: [[usize; 9]; 9]) -> Sudoku {
    Sudoku::new(Shape::new(3, 3).unwrap(), Board::from(grid)).unwrap()
}

fn first_solution_with<C: ColumnSelection + Copy>(sudoku: &Sudoku, selector: C) {
    let solved = sudoku.solutions_with(selector).next();
    black_box(solved);
}

fn bench_sudoku(c: &mut Criterion) {
    let classic = nine(EXAMPLE_NINE);
    c.bench_function("sudoku 9x9 - classic", |b| {
        b.iter(|| first_solution_with(&classic, FewestCandidates));
    });

    let seventeen = nine(EXAMPLE_SEVENTEEN_CLUE);
    c.bench_function("sudoku 9x9 - 17 clues", |b| {
        b.iter(|| first_solution_with(&seventeen, FewestCandidates));
    });

    let four = Sudoku::new(Shape::new(2, 2).unwrap(), Board::from(EXAMPLE_FOUR)).unwrap();
    c.bench_function("sudoku 4x4 - example", |b| {
        b.iter(|| first_solution_with(&four, FewestCandidates));
    });
}

fn bench_full_enumeration(c: &mut Criterion) {
    let empty = Sudoku::new(Shape::new(2, 2).unwrap(), Board::new(vec![vec![0; 4]; 4])).unwrap();
    c.bench_function("sudoku 4x4 - enumerate all 288 grids", |b| {
        b.iter(|| {
            let count = empty.solutions().count();
            black_box(count);
        });
    });
}

fn bench_column_selection(c: &mut Criterion) {
    let classic = nine(EXAMPLE_NINE);

    c.bench_function("selector - fewest candidates", |b| {
        b.iter(|| first_solution_with(&classic, FewestCandidates));
    });

    c.bench_function("selector - declaration order", |b| {
        b.iter(|| first_solution_with(&classic, DeclarationOrder));
    });
}

fn bench_generic_instance(c: &mut Criterion) {
    // Knuth's 7-column instance, searched to exhaustion.
    let matrix = Matrix::new(
        7,
        [
            vec![2, 4, 5],
            vec![0, 3, 6],
            vec![1, 2, 5],
            vec![0, 3],
            vec![1, 6],
            vec![3, 4, 6],
        ],
    );

    c.bench_function("generic - knuth 7 columns", |b| {
        b.iter(|| {
            let covers: Vec<_> = Search::new(matrix.clone()).collect();
            black_box(covers);
        });
    });
}

criterion_group!(
    benches,
    bench_sudoku,
    bench_full_enumeration,
    bench_column_selection,
    bench_generic_instance
);
criterion_main!(benches);
