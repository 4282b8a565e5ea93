/*!
# Expressions

Every value is a 64-bit floating point number. Variable names are a
letter followed by letters and digits. Case never matters, neither in
names nor in keywords; `Total`, `TOTAL` and `total` are one variable.

```text
LET PI2 = 6.28
PRINT pi2
6.28
```

Numbers are written as digits with an optional fraction. There is no
exponent notation and no leading decimal point; write `0.5`, not `.5`.
A minus sign in front of a number is an operator.

## Operators

From lowest to highest precedence:

| Operator              | Meaning                     |
|-----------------------|-----------------------------|
| `OR`                  | either is true              |
| `AND`                 | both are true               |
| `NOT`                 | logical negation            |
| `= <> < <= > >=`      | comparison                  |
| `+ -`                 | addition and subtraction    |
| `* /`                 | multiplication and division |
| `+ -` (unary)         | sign                        |

Comparisons and logic produce -1 for true and 0 for false. Any number
other than zero counts as true. Only one comparison is allowed without
parentheses, so `1<2<3` is an error while `(1<2)<3` is -1.

A sign in front of a function call is ignored. Write `-(ABS(X))` to
negate the result of `ABS`.

```text
PRINT 2+3*4, " ", (2+3)*4
14 20
PRINT 3>2 AND NOT 0
-1
```
*/
