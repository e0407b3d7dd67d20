use ndarray::array;
use npframe::DataFrame;

fn main() -> anyhow::Result<()> {
    let data = array![
        [1.5, 2.3, 3.7],
        [5.1, 6.8, 7.3],
        [9.4, 10.2, 11.6],
        [13.2, 14.5, 15.8],
    ];
    let df = DataFrame::new(data, ["Temperature", "Pressure", "Volume"])?;

    println!("DataFrame with experimental data:");
    println!("{}\n", df);

    let df_empty: DataFrame = DataFrame::empty();
    println!("Empty DataFrame:");
    println!("{}\n", df_empty);

    let df_cols: DataFrame = DataFrame::with_columns(["X", "Y", "Z", "W"]);
    println!("DataFrame with columns only:");
    println!("{}", df_cols);

    Ok(())
}
