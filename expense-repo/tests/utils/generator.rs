use chrono::{Duration, NaiveDate};
use expense_repo::transaction_repo::{NewTransaction, TransactionType};
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use rand::seq::SliceRandom;

trait Generator<T> {
    fn gen(&mut self) -> T;
}

struct Predefined<T> {
    values: Vec<T>,
    current_pos: usize,
}

impl<T> Predefined<T> {
    fn boxed(values: Vec<T>) -> Box<Predefined<T>> {
        Box::new(Predefined {
            values,
            current_pos: 0,
        })
    }
}

impl<T: Clone> Generator<T> for Predefined<T> {
    fn gen(&mut self) -> T {
        let v = self.values[self.current_pos].clone();
        self.current_pos += 1;
        v
    }
}

struct RandomSample<T> {
    values: Vec<T>,
}

impl<T> RandomSample<T> {
    fn boxed(values: Vec<T>) -> Box<RandomSample<T>> {
        Box::new(RandomSample { values })
    }
}

impl<T: Clone> Generator<T> for RandomSample<T> {
    fn gen(&mut self) -> T {
        self.values.choose(&mut rand::thread_rng()).unwrap().clone()
    }
}

struct FakeGenerator<F: Fake> {
    fake: F,
}

impl<F: Fake> FakeGenerator<F> {
    fn boxed(fake: F) -> Box<FakeGenerator<F>> {
        Box::new(FakeGenerator { fake })
    }
}

impl<T: fake::Dummy<F>, F> Generator<T> for FakeGenerator<F> {
    fn gen(&mut self) -> T {
        self.fake.fake()
    }
}

/// Whole cents, so sums stay exact.
struct FakeAmount;

impl Generator<f64> for FakeAmount {
    fn gen(&mut self) -> f64 {
        (1..1_000_000).fake::<i64>() as f64 / 100.0
    }
}

struct FakeDate;

impl Generator<NaiveDate> for FakeDate {
    fn gen(&mut self) -> NaiveDate {
        let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        start + Duration::days((0..10_000).fake::<i64>())
    }
}

#[allow(dead_code)]
pub struct NewTransactionGenerator {
    kind_gen: Box<dyn Generator<TransactionType>>,
    cat_gen: Box<dyn Generator<Option<String>>>,
    amnt_gen: Box<dyn Generator<f64>>,
    date_gen: Box<dyn Generator<NaiveDate>>,
    desc_gen: Box<dyn Generator<Option<String>>>,
}

#[allow(dead_code)]
impl NewTransactionGenerator {
    pub fn with_types(mut self, kinds: Vec<TransactionType>) -> NewTransactionGenerator {
        self.kind_gen = Predefined::boxed(kinds);
        self
    }

    pub fn with_categories(mut self, categories: Vec<&str>) -> NewTransactionGenerator {
        let categories = categories
            .into_iter()
            .map(|c| Some(c.to_string()))
            .collect();
        self.cat_gen = Predefined::boxed(categories);
        self
    }

    pub fn with_amounts(mut self, amounts: Vec<f64>) -> NewTransactionGenerator {
        self.amnt_gen = Predefined::boxed(amounts);
        self
    }

    pub fn with_dates(mut self, dates: Vec<NaiveDate>) -> NewTransactionGenerator {
        self.date_gen = Predefined::boxed(dates);
        self
    }

    pub fn generate(&mut self) -> NewTransaction {
        NewTransaction::new(
            self.kind_gen.gen(),
            self.cat_gen.gen(),
            self.amnt_gen.gen(),
            self.date_gen.gen(),
            self.desc_gen.gen(),
        )
    }

    pub fn generate_many(&mut self, count: usize) -> Vec<NewTransaction> {
        let mut vec = Vec::with_capacity(count);
        for _ in 0..count {
            vec.push(self.generate())
        }
        vec
    }
}

impl Default for NewTransactionGenerator {
    fn default() -> Self {
        NewTransactionGenerator {
            kind_gen: RandomSample::boxed(vec![TransactionType::Income, TransactionType::Expense]),
            cat_gen: RandomSample::boxed(vec![
                None,
                Some("Salary".to_string()),
                Some("Groceries".to_string()),
                Some("Eating Out".to_string()),
                Some("Transportation".to_string()),
            ]),
            amnt_gen: Box::new(FakeAmount),
            date_gen: Box::new(FakeDate),
            desc_gen: FakeGenerator::boxed(Sentence(5..10)),
        }
    }
}
