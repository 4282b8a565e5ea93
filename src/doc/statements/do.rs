/*!
# `DO`
Also see `LOOP`

## Purpose
Marks the start of a block repeated by `LOOP`.

## Example
```text
10 LET N=1
20 DO
30 LET N=N*2
40 LOOP WHILE N<100
50 PRINT N
RUN
128
```

*/
