use bigdecimal::{BigDecimal, Zero};
use sales_analytics::models::round_money;
use sales_analytics::{
    analyze_sales_data, AnalysisError, AnalysisOptions, Item, Product, PurchaseRecord, SalesData, Seller,
};
use std::collections::HashMap;
use std::str::FromStr;

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

/// 6 个卖家、8 个商品、若干小票 (含未知卖家与未知 SKU)
fn dataset() -> SalesData {
    let sellers = (1..=6)
        .map(|n| Seller::new(format!("seller_{}", n), format!("Name{}", n), format!("Surname{}", n)))
        .collect();

    let products = (1..=8)
        .map(|n| Product::new(format!("SKU_{:03}", n), dec(&format!("{}.50", n))))
        .collect();

    let mut purchase_records = Vec::new();
    for n in 0..60u64 {
        let seller = format!("seller_{}", n % 6 + 1);
        let items: Vec<Item> = (0..(n % 4 + 1))
            .map(|k| {
                Item::new(
                    format!("SKU_{:03}", (n + k) % 8 + 1),
                    k + 1 + n % 3,
                    dec(&format!("{}.99", 5 + (n + k) % 7)),
                    BigDecimal::from((n * 7 + k) % 30),
                )
            })
            .collect();
        let total: BigDecimal = items
            .iter()
            .map(|i| &i.sale_price * BigDecimal::from(i.quantity))
            .fold(BigDecimal::zero(), |acc, x| acc + x);
        purchase_records.push(PurchaseRecord::new(seller, total, dec("1.25"), items));
    }

    purchase_records.push(PurchaseRecord::new(
        "seller_404",
        dec("999"),
        BigDecimal::zero(),
        vec![Item::new("SKU_001", 10, dec("99.9"), BigDecimal::zero())],
    ));
    purchase_records.push(PurchaseRecord::new(
        "seller_3",
        dec("10"),
        BigDecimal::zero(),
        vec![Item::new("SKU_999", 1, dec("10"), BigDecimal::zero())],
    ));

    SalesData {
        sellers,
        products,
        purchase_records,
    }
}

#[test]
fn test_one_row_per_seller() {
    let data = dataset();
    let rows = analyze_sales_data(Some(&data), Some(&AnalysisOptions::defaults())).unwrap();
    assert_eq!(rows.len(), data.sellers.len());
}

#[test]
fn test_revenue_matches_known_seller_records() {
    let data = dataset();
    let rows = analyze_sales_data(Some(&data), Some(&AnalysisOptions::defaults())).unwrap();

    let expected = data
        .purchase_records
        .iter()
        .filter(|r| data.sellers.iter().any(|s| s.id == r.seller_id))
        .fold(BigDecimal::zero(), |acc, r| acc + r.net_amount());
    let actual = rows.iter().fold(BigDecimal::zero(), |acc, r| acc + &r.revenue);

    // 每行已按两位小数取整，输入金额本身只有两位小数
    assert_eq!(round_money(&actual), round_money(&expected));
    let total_sales: u64 = rows.iter().map(|r| r.sales_count).sum();
    assert_eq!(total_sales, 61);
}

#[test]
fn test_rows_sorted_by_profit_and_top_products_ordered() {
    let data = dataset();
    let rows = analyze_sales_data(Some(&data), Some(&AnalysisOptions::defaults())).unwrap();

    assert!(rows.windows(2).all(|w| w[0].profit >= w[1].profit));
    for row in &rows {
        assert!(row.top_products.len() <= 10);
        assert!(row
            .top_products
            .windows(2)
            .all(|w| w[0].quantity >= w[1].quantity));
    }
}

/// 不经过 analyzer，直接按明细算出每个卖家未取整的利润
fn unrounded_profits(data: &SalesData) -> HashMap<String, BigDecimal> {
    let prices: HashMap<&str, &BigDecimal> = data
        .products
        .iter()
        .map(|p| (p.sku.as_str(), &p.purchase_price))
        .collect();

    let mut profits: HashMap<String, BigDecimal> = HashMap::new();
    for record in &data.purchase_records {
        if !data.sellers.iter().any(|s| s.id == record.seller_id) {
            continue;
        }
        let profit = profits.entry(record.seller_id.clone()).or_insert_with(BigDecimal::zero);
        for item in &record.items {
            let Some(&price) = prices.get(item.sku.as_str()) else {
                continue;
            };
            let quantity = BigDecimal::from(item.quantity);
            let factor = BigDecimal::from(1) - &item.discount / BigDecimal::from(100);
            *profit += &item.sale_price * &quantity * factor - price * &quantity;
        }
    }
    profits
}

#[test]
fn test_default_bonus_by_rank() {
    let data = dataset();
    let rows = analyze_sales_data(Some(&data), Some(&AnalysisOptions::defaults())).unwrap();
    let profits = unrounded_profits(&data);
    let last = rows.len() - 1;

    for (rank, row) in rows.iter().enumerate() {
        let profit = &profits[&row.seller_id];
        assert_eq!(row.profit, round_money(profit), "rank {}", rank);

        let expected = if rank == last {
            BigDecimal::zero()
        } else if rank == 0 {
            round_money(&(profit * dec("0.15")))
        } else if rank <= 2 {
            round_money(&(profit * dec("0.10")))
        } else {
            round_money(&(profit * dec("0.05")))
        };
        assert_eq!(row.bonus, expected, "rank {}", rank);
    }
    assert_eq!(rows[last].bonus, BigDecimal::zero());
}

#[test]
fn test_repeated_calls_are_identical() {
    let data = dataset();
    let options = AnalysisOptions::defaults();
    let first = analyze_sales_data(Some(&data), Some(&options)).unwrap();
    let second = analyze_sales_data(Some(&data), Some(&options)).unwrap();
    assert_eq!(first, second);
    assert_eq!(data, dataset());
}

#[test]
fn test_unknown_seller_not_accumulated() {
    let mut data = dataset();
    let baseline = analyze_sales_data(Some(&data), Some(&AnalysisOptions::defaults())).unwrap();

    data.purchase_records.push(PurchaseRecord::new(
        "nobody",
        dec("5000"),
        BigDecimal::zero(),
        vec![Item::new("SKU_002", 50, dec("100"), BigDecimal::zero())],
    ));
    let rows = analyze_sales_data(Some(&data), Some(&AnalysisOptions::defaults())).unwrap();

    assert_eq!(rows, baseline);
}

#[test]
fn test_single_seller_gets_no_bonus() {
    let data = SalesData {
        sellers: vec![Seller::new("solo", "Anna", "Smirnova")],
        products: vec![Product::new("A", dec("10"))],
        purchase_records: vec![PurchaseRecord::new(
            "solo",
            dec("100"),
            BigDecimal::zero(),
            vec![Item::new("A", 5, dec("20"), BigDecimal::zero())],
        )],
    };

    let rows = analyze_sales_data(Some(&data), Some(&AnalysisOptions::defaults())).unwrap();
    assert_eq!(rows[0].profit, dec("50"));
    assert_eq!(rows[0].bonus, BigDecimal::zero());
}

#[test]
fn test_error_taxonomy() {
    let data = dataset();

    let err = analyze_sales_data(None, Some(&AnalysisOptions::defaults())).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidInput(_)));

    let err = analyze_sales_data(Some(&data), None).unwrap_err();
    assert!(matches!(err, AnalysisError::MissingOptions));

    let options = AnalysisOptions {
        calculate_revenue: None,
        ..AnalysisOptions::defaults()
    };
    let err = analyze_sales_data(Some(&data), Some(&options)).unwrap_err();
    assert!(matches!(err, AnalysisError::MissingStrategy(_)));
}
