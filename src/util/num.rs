/// Returns the smallest prime number strictly greater than `number`.
pub fn next_prime_after(number: usize) -> usize {
    let mut candidate = number.saturating_add(1);
    if candidate <= 2 {
        return 2;
    }

    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

pub const fn is_prime(number: usize) -> bool {
    if number < 2 {
        return false;
    }
    if number % 2 == 0 {
        return number == 2;
    }

    let mut divisor = 3;
    while divisor <= number / divisor {
        if number % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_prime_after() {
        assert_eq!(next_prime_after(0), 2);
        assert_eq!(next_prime_after(1), 2);
        assert_eq!(next_prime_after(2), 3);
        assert_eq!(next_prime_after(13), 17);
        assert_eq!(next_prime_after(17), 19, "The result should be strictly greater.");
        assert_eq!(next_prime_after(22), 23);
        assert_eq!(next_prime_after(24), 29);
        assert_eq!(next_prime_after(89), 97);
    }

    #[test]
    fn test_is_prime() {
        let primes: [usize; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];
        for n in 0..30 {
            assert_eq!(is_prime(n), primes.contains(&n), "Primality of {n} is wrong.");
        }
        assert!(is_prime(7919));
        assert!(!is_prime(7917));
    }
}
